//! Chess rules and advisory core
//!
//! Pure chess logic for a teaching board: move generation, check and
//! game-status detection, move application with auto-promotion, a tiered
//! heuristic opponent and a catalog of strategy tips used to explain its
//! choices.
//!
//! # Module Organization
//!
//! - `types` - Players, board coordinates, moves and algebraic notation
//! - `pieces` - Tagged piece identity and square contents
//! - `rules` - Board model, pseudo-legal generation, check/status, legality
//! - `evaluation` - Material, center control, mobility, pawn structure
//! - `ai` - Difficulty tiers, move scoring, opponent moves, hints
//! - `strategy` - Static strategy tip catalog
//! - `session` - Turn-keeping game session with move history
//! - `config` - Persisted settings
//! - `error` - Error types for parsing, sessions and settings
//!
//! # Conventions
//!
//! - Row 0 is black's back rank, row 7 is white's
//! - Boards are values: applying a move returns a new [`Board`]
//! - Evaluation scores are positive when they favor black
//! - Generation is pseudo-legal; [`rules::legal_moves_for_player`] is the one
//!   place that filters out self-check
//!
//! # Examples
//!
//! ```
//! use chess_mentor::{check_game_status, generate_ai_move, make_move, Board, Difficulty, Player};
//!
//! let board = Board::initial();
//! let reply = generate_ai_move(&board, Difficulty::Advanced);
//! let board = make_move(&board, reply.mv);
//! assert!(!check_game_status(&board, Player::White).is_terminal());
//! ```

pub mod ai;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod pieces;
pub mod rules;
pub mod session;
pub mod strategy;
pub mod types;

pub use ai::{
    generate_ai_move, get_ai_move_explanation, get_suggestion, AIMoveResult, Difficulty,
    Suggestion,
};
pub use config::MentorSettings;
pub use error::{MentorError, MentorResult};
pub use pieces::{Piece, PieceKind, Square};
pub use rules::{
    check_game_status, get_possible_moves, is_king_in_check, legal_moves_for_player, make_move,
    Board, GameStatus,
};
pub use session::GameSession;
pub use strategy::{Phase, StrategyTip};
pub use types::{move_to_algebraic, to_algebraic, Move, Player, Position};
