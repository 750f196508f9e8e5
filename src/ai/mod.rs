//! Heuristic move selection for the automated opponent and player hints
//!
//! # Architecture
//!
//! Everything here is single-ply static evaluation: each legal move is played
//! on a copy of the board, scored, and the best one is returned. There is no
//! search tree.
//!
//! # Module Structure
//!
//! - [`difficulty`] - [`Difficulty`] tiers and their [`ScoringProfile`] weights
//! - [`scoring`] - Per-move scoring and ranking shared by every profile
//! - [`selector`] - [`generate_ai_move`] for the black side
//! - [`explanation`] - Readable commentary for a chosen move
//! - [`suggestion`] - [`get_suggestion`] hints for the white side
//!
//! # Examples
//!
//! ```
//! use chess_mentor::ai::{generate_ai_move, get_ai_move_explanation, Difficulty};
//! use chess_mentor::rules::Board;
//!
//! let board = Board::initial();
//! let result = generate_ai_move(&board, Difficulty::Intermediate);
//! println!("{}: {}", result.mv, get_ai_move_explanation(&board, &result));
//! ```

pub mod difficulty;
pub mod explanation;
pub mod scoring;
pub mod selector;
pub mod suggestion;

pub use difficulty::{Difficulty, ScoringProfile};
pub use explanation::{get_ai_move_explanation, get_ai_move_explanation_with_rng};
pub use scoring::{rank_moves, score_move, MoveFactors, ScoredMove};
pub use selector::{generate_ai_move, generate_ai_move_with_rng, AIMoveResult, AI_PLAYER};
pub use suggestion::{get_suggestion, Suggestion, HINT_PLAYER};
