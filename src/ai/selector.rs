//! Automated opponent move selection
//!
//! The automated side is always black. Beginner play is random with a taste
//! for captures; intermediate and advanced play rank every legal move with
//! their [`ScoringProfile`] and take the single best one, so for a given board
//! they always answer with the same move.

use super::difficulty::{Difficulty, ScoringProfile};
use super::scoring::{rank_moves, MoveFactors, ScoredMove};
use crate::pieces::Piece;
use crate::rules::{legal_moves_for_player, pseudo_legal_moves, Board};
use crate::strategy::{tip_by_id, StrategyTip};
use crate::types::{Move, Player};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

/// Side played by [`generate_ai_move`]
pub const AI_PLAYER: Player = Player::Black;

/// Chosen move plus the reasoning attached to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AIMoveResult {
    #[serde(rename = "move")]
    pub mv: Move,
    /// Catalog tip illustrated by the move, if any
    pub strategy: Option<&'static StrategyTip>,
    /// Short human-readable reason for the choice
    pub rationale: Option<String>,
}

impl AIMoveResult {
    fn new(mv: Move) -> Self {
        Self {
            mv,
            strategy: None,
            rationale: None,
        }
    }
}

/// Pick black's move for `board` at the given difficulty
pub fn generate_ai_move(board: &Board, difficulty: Difficulty) -> AIMoveResult {
    generate_ai_move_with_rng(board, difficulty, &mut rand::rng())
}

/// [`generate_ai_move`] with an explicit random source (only the beginner tier
/// draws from it)
pub fn generate_ai_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> AIMoveResult {
    let legal = legal_moves_for_player(board, AI_PLAYER);
    debug!(
        "[AI] {} selecting among {} legal moves",
        difficulty,
        legal.len()
    );

    if legal.is_empty() {
        return no_legal_moves(board);
    }

    let result = match difficulty.profile() {
        None => beginner_move(board, &legal, rng),
        Some(profile) => best_scored_move(board, difficulty, &profile),
    };

    debug!(
        "[AI] {} chose {} ({})",
        difficulty,
        result.mv,
        result.strategy.map_or("no strategy", |tip| tip.id)
    );
    result
}

/// Callers should not ask for a move once the game is over; answer with the
/// first unfiltered move, or the null move when there is none
fn no_legal_moves(board: &Board) -> AIMoveResult {
    let mv = pseudo_legal_moves(board, AI_PLAYER)
        .first()
        .copied()
        .unwrap_or_else(Move::null);
    warn!("[AI] No legal moves for {}; falling back to {}", AI_PLAYER, mv);

    AIMoveResult {
        rationale: Some("I have no legal moves left.".to_string()),
        ..AIMoveResult::new(mv)
    }
}

fn beginner_move<R: Rng + ?Sized>(board: &Board, legal: &[Move], rng: &mut R) -> AIMoveResult {
    let captures: Vec<Move> = legal
        .iter()
        .copied()
        .filter(|mv| board.get(mv.to).is_piece_of(AI_PLAYER.opponent()))
        .collect();

    let pool = if captures.is_empty() {
        legal
    } else {
        captures.as_slice()
    };
    let Some(&mv) = pool.choose(rng) else {
        return no_legal_moves(board);
    };

    let mover = piece_name(board.get(mv.from).as_piece());
    match board.get(mv.to).as_piece() {
        Some(target) => AIMoveResult {
            strategy: tip_by_id("general-captures"),
            rationale: Some(format!(
                "Capturing your {} on {} with my {}.",
                target.kind.name(),
                mv.to,
                mover
            )),
            ..AIMoveResult::new(mv)
        },
        None => AIMoveResult {
            rationale: Some(format!(
                "Playing a random move: my {} goes to {}.",
                mover, mv.to
            )),
            ..AIMoveResult::new(mv)
        },
    }
}

fn best_scored_move(board: &Board, difficulty: Difficulty, profile: &ScoringProfile) -> AIMoveResult {
    let ranked = rank_moves(board, AI_PLAYER, profile);
    let Some(best) = ranked.first() else {
        return no_legal_moves(board);
    };

    debug!(
        "[AI] {} top score {:.2} for {} out of {}",
        difficulty,
        best.score,
        best.mv,
        ranked.len()
    );

    AIMoveResult {
        strategy: strategy_for(difficulty, profile, &best.factors),
        rationale: rationale_for(board, best),
        ..AIMoveResult::new(best.mv)
    }
}

/// First tip whose bonus fired
///
/// Only terms with a non-zero weight in `profile` count. Center and
/// development tips come first; a capture tip is attached only when neither
/// fired. The advanced tier leads with checks and falls back to the signs of
/// its positional terms.
fn strategy_for(
    difficulty: Difficulty,
    profile: &ScoringProfile,
    factors: &MoveFactors,
) -> Option<&'static StrategyTip> {
    let checks = factors.check && profile.check_bonus > 0.0;
    let mut ids: Vec<&str> = Vec::new();

    if difficulty == Difficulty::Advanced && checks {
        ids.push("general-checks");
    }
    if factors.center && profile.center_bonus > 0.0 {
        ids.push("opening-center");
    }
    if factors.development && profile.development_bonus > 0.0 {
        ids.push("opening-develop");
    }
    if factors.captured.is_some() {
        ids.push("general-captures");
    }
    if checks {
        ids.push("general-checks");
    }
    if profile.positional {
        if factors.board_control > 0.0 {
            ids.push("middlegame-activity");
        }
        if factors.pawn_structure > 0.0 {
            ids.push("middlegame-pawnstructure");
        }
        if factors.mobility > 0.0 {
            ids.push("middlegame-activity");
        }
    }

    ids.into_iter().find_map(tip_by_id)
}

fn rationale_for(board: &Board, scored: &ScoredMove) -> Option<String> {
    let factors = &scored.factors;
    let mover = piece_name(board.get(scored.mv.from).as_piece());
    let to = scored.mv.to;
    let mut sentences: Vec<String> = Vec::new();

    if factors.checkmate {
        sentences.push("Checkmate! Your king has nowhere to go.".to_string());
    } else if factors.check {
        sentences.push(format!("My {} puts your king in check.", mover));
    }
    if let Some(captured) = factors.captured {
        sentences.push(format!(
            "Capturing your {} on {} wins material.",
            captured.kind.name(),
            to
        ));
    }
    if factors.center {
        sentences.push(format!(
            "Moving my {} to {} strengthens my hold on the center.",
            mover, to
        ));
    }
    if factors.development {
        sentences.push(format!("This develops my {} off the back rank.", mover));
    }

    if sentences.is_empty() {
        if factors.board_control > 0.0 {
            sentences.push("This improves my control of the central squares.".to_string());
        } else if factors.pawn_structure > 0.0 {
            sentences.push("This leaves my pawn structure healthier than yours.".to_string());
        } else if factors.mobility > 0.0 {
            sentences.push("This gives my pieces more room to move.".to_string());
        }
    }

    if sentences.is_empty() {
        None
    } else {
        Some(sentences.join(" "))
    }
}

fn piece_name(piece: Option<Piece>) -> &'static str {
    piece.map_or("piece", |p| p.kind.name())
}
