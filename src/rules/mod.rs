//! Chess rules module - Pure game logic
//!
//! Implements move generation, check detection and move application as pure
//! functions over immutable [`Board`] snapshots.
//!
//! # Architecture
//!
//! - **Pure functions** for move generation (easy to unit test)
//! - **Value-type boards**: applying a move returns a new board
//! - **One legality layer** ([`legality`]) shared by every caller
//!
//! # Module Structure
//!
//! - `board` - Board representation and ownership predicates
//! - `piece_moves` - Pseudo-legal movement rules for each piece type
//! - `check` - King lookup and attack detection
//! - `legality` - Self-check filtering on top of `piece_moves`
//! - `status` - Playing / check / checkmate / stalemate classification
//! - `apply` - Move application with automatic queen promotion
//!
//! Castling, en passant and draw rules (repetition, fifty moves, insufficient
//! material) are not implemented.

pub mod apply;
pub mod board;
pub mod check;
pub mod legality;
pub mod piece_moves;
pub mod status;


// Re-export commonly used items
pub use apply::make_move;
pub use board::{is_piece_of_player, is_within_bounds, Board, INITIAL_PLACEMENT};
pub use check::{get_king_position, is_king_in_check, is_square_attacked};
pub use legality::{
    has_legal_move, is_legal_for, is_legal_move, legal_destinations, legal_moves_for_player,
};
pub use piece_moves::{get_possible_moves, pseudo_legal_moves};
pub use status::{check_game_status, GameStatus};
