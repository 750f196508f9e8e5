//! Single-ply move scoring
//!
//! Every legal move is played on a copy of the board and scored with the
//! weights of a [`ScoringProfile`]. Positional terms are signed toward the
//! mover, so the same profile works for either side.

use super::difficulty::ScoringProfile;
use crate::evaluation::{
    capture_value, evaluate_board_control, evaluate_mobility, evaluate_pawn_structure,
    is_center_square,
};
use crate::pieces::Piece;
use crate::rules::{has_legal_move, is_king_in_check, legal_moves_for_player, make_move, Board};
use crate::types::{Move, Player};
use serde::Serialize;

/// Which heuristics a move triggered
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MoveFactors {
    /// Opponent piece removed by the move
    pub captured: Option<Piece>,
    /// Destination is d4, d5, e4 or e5
    pub center: bool,
    /// Knight or bishop leaving its back rank
    pub development: bool,
    /// Opponent king is in check afterwards
    pub check: bool,
    /// Check with no legal reply
    pub checkmate: bool,
    pub board_control: f64,
    pub mobility: f64,
    pub pawn_structure: f64,
}

/// A move with its total score and the terms behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
    pub factors: MoveFactors,
}

/// +1 when positive evaluation favors `player`, else -1
fn perspective(player: Player) -> f64 {
    match player {
        Player::Black => 1.0,
        Player::White => -1.0,
    }
}

/// Score `mv` for the piece on its origin square
///
/// The move is assumed legal; the origin must hold a piece.
pub fn score_move(board: &Board, mv: Move, profile: &ScoringProfile) -> Option<ScoredMove> {
    let mover = board.get(mv.from).as_piece()?;
    let player = mover.color;
    let opponent = player.opponent();
    let after = make_move(board, mv);

    let mut factors = MoveFactors {
        captured: board
            .get(mv.to)
            .as_piece()
            .filter(|captured| captured.color == opponent),
        center: is_center_square(mv.to),
        development: mover.kind.is_minor()
            && mv.from.row == player.back_rank()
            && mv.to.row != player.back_rank(),
        check: is_king_in_check(&after, opponent),
        ..MoveFactors::default()
    };
    factors.checkmate = factors.check && !has_legal_move(&after, opponent);

    let mut score = 0.0;
    if let Some(captured) = factors.captured {
        score += capture_value(captured, profile.king_capture_value) * profile.capture_weight;
    }
    if factors.center {
        score += profile.center_bonus;
    }
    if factors.development {
        score += profile.development_bonus;
    }
    if factors.check {
        score += profile.check_bonus;
        if factors.checkmate {
            score += profile.checkmate_bonus;
        }
    }

    if profile.positional {
        let sign = perspective(player);
        factors.board_control = sign * evaluate_board_control(&after);
        factors.mobility = sign * evaluate_mobility(&after);
        factors.pawn_structure = sign * evaluate_pawn_structure(&after);
        score += factors.board_control + factors.mobility + factors.pawn_structure;
    }

    Some(ScoredMove { mv, score, factors })
}

/// Every legal move for `player`, best first
///
/// The sort is stable, so equal scores keep generation order (row-major
/// board scan, then per-piece move order).
pub fn rank_moves(board: &Board, player: Player, profile: &ScoringProfile) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = legal_moves_for_player(board, player)
        .into_iter()
        .filter_map(|mv| score_move(board, mv, profile))
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
