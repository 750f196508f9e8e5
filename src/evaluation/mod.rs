//! Static position evaluation
//!
//! Pure scoring functions over a [`crate::rules::Board`]. By convention a
//! positive score favors black (the automated side) and a negative score
//! favors white.
//!
//! ## Module Organization
//!
//! - `material` - Piece values for captures and the overall material balance
//! - `position` - Center control and mobility
//! - `pawns` - Doubled, isolated and passed pawns
//!
//! There is no single combined evaluation: each scoring profile in
//! [`crate::ai`] decides which of these terms it adds.

mod material;
mod pawns;
mod position;

pub use material::{capture_value, material_balance};
pub use pawns::evaluate_pawn_structure;
pub use position::{
    evaluate_board_control, evaluate_mobility, is_center_square, CENTER_SQUARES,
    EXTENDED_CENTER_SQUARES,
};
