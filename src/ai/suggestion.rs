//! Move hints for the human (white) player
//!
//! Hints rank white's legal moves with [`ScoringProfile::hint`], a gentle
//! profile that rewards captures, the center, development and checks. The
//! board is only read, never changed.

use super::difficulty::ScoringProfile;
use super::scoring::{rank_moves, MoveFactors};
use crate::rules::Board;
use crate::strategy::{tip_by_id, StrategyTip};
use crate::types::{Move, Player, Position};
use serde::Serialize;
use tracing::{debug, warn};

/// Side that receives hints
pub const HINT_PLAYER: Player = Player::White;

/// e2-e4, offered when nothing can be ranked
const FALLBACK_MOVE: Move = Move::new(Position::new(6, 4), Position::new(4, 4));

/// A recommended move for the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "move")]
    pub mv: Move,
    pub explanation: String,
    pub strategy_applied: Option<&'static StrategyTip>,
}

/// Suggest white's best move on `board`
pub fn get_suggestion(board: &Board) -> Suggestion {
    let ranked = rank_moves(board, HINT_PLAYER, &ScoringProfile::hint());

    let Some(best) = ranked.first() else {
        warn!("[HINT] No legal moves to rank; suggesting {}", FALLBACK_MOVE);
        return Suggestion {
            mv: FALLBACK_MOVE,
            explanation: "Push your king's pawn two squares to claim the center.".to_string(),
            strategy_applied: tip_by_id("opening-center"),
        };
    };

    debug!(
        "[HINT] Suggesting {} (score {:.2}, {} candidates)",
        best.mv,
        best.score,
        ranked.len()
    );

    let (explanation, tip_id) = describe(&best.factors);
    Suggestion {
        mv: best.mv,
        explanation: explanation.to_string(),
        strategy_applied: tip_id.and_then(tip_by_id),
    }
}

/// Explanation and tip for the first factor that applies
fn describe(factors: &MoveFactors) -> (&'static str, Option<&'static str>) {
    if factors.captured.is_some() {
        (
            "This move captures your opponent's piece, which is usually a good idea in chess.",
            Some("general-captures"),
        )
    } else if factors.center {
        (
            "This move helps control the center of the board, which is a key chess principle.",
            Some("opening-center"),
        )
    } else if factors.development {
        (
            "This move develops one of your pieces, getting them into the game. Development is important in the opening.",
            Some("opening-develop"),
        )
    } else if factors.check {
        (
            "This move puts your opponent's king in check.",
            Some("general-checks"),
        )
    } else {
        (
            "This looks like a solid move that improves your position.",
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Piece, PieceKind};

    #[test]
    fn test_initial_position_suggests_center_pawn() {
        //! d2-d4 and e2-e4 tie at 0.5; d4 comes first in generation order
        let suggestion = get_suggestion(&Board::initial());
        assert_eq!(suggestion.mv, Move::new(Position::new(6, 3), Position::new(4, 3)));
        assert!(suggestion.explanation.contains("center"));
        assert_eq!(suggestion.strategy_applied.map(|tip| tip.id), Some("opening-center"));
    }

    #[test]
    fn test_suggestion_does_not_mutate_board() {
        let board = Board::initial();
        let before = board.clone();
        let _ = get_suggestion(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_fallback_when_white_cannot_move() {
        let board = Board::with_pieces(&[(Piece::new(PieceKind::King, Player::Black), Position::new(0, 0))]);
        let suggestion = get_suggestion(&board);
        assert_eq!(suggestion.mv, FALLBACK_MOVE);
        assert_eq!(suggestion.strategy_applied.map(|tip| tip.id), Some("opening-center"));
    }

    #[test]
    fn test_check_explanation() {
        //! A quiet rook check is the only scoring move
        let board = Board::with_pieces(&[
            (Piece::new(PieceKind::King, Player::White), Position::new(7, 7)),
            (Piece::new(PieceKind::Rook, Player::White), Position::new(7, 0)),
            (Piece::new(PieceKind::King, Player::Black), Position::new(0, 4)),
        ]);
        let suggestion = get_suggestion(&board);
        assert_eq!(suggestion.explanation, "This move puts your opponent's king in check.");
        assert_eq!(suggestion.mv.to.col, 4);
    }
}
