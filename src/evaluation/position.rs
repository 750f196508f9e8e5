//! Center control and mobility

use crate::rules::{get_possible_moves, Board};
use crate::types::{Player, Position};

/// d4, d5, e4, e5
pub const CENTER_SQUARES: [Position; 4] = [
    Position::new(3, 3),
    Position::new(3, 4),
    Position::new(4, 3),
    Position::new(4, 4),
];

/// Ring of twelve squares around the center
pub const EXTENDED_CENTER_SQUARES: [Position; 12] = [
    Position::new(2, 2),
    Position::new(2, 3),
    Position::new(2, 4),
    Position::new(2, 5),
    Position::new(3, 2),
    Position::new(3, 5),
    Position::new(4, 2),
    Position::new(4, 5),
    Position::new(5, 2),
    Position::new(5, 3),
    Position::new(5, 4),
    Position::new(5, 5),
];

pub fn is_center_square(position: Position) -> bool {
    CENTER_SQUARES.contains(&position)
}

/// Occupation of the center: ±3 per center square, ±1 per extended square
pub fn evaluate_board_control(board: &Board) -> f64 {
    let occupation = |squares: &[Position], weight: f64| -> f64 {
        squares
            .iter()
            .filter_map(|&pos| board.piece_color(pos))
            .map(|color| match color {
                Player::Black => weight,
                Player::White => -weight,
            })
            .sum()
    };

    occupation(&CENTER_SQUARES, 3.0) + occupation(&EXTENDED_CENTER_SQUARES, 1.0)
}

/// 0.1 × (black pseudo-legal destinations − white pseudo-legal destinations)
pub fn evaluate_mobility(board: &Board) -> f64 {
    let mut black_moves = 0i32;
    let mut white_moves = 0i32;

    for (pos, piece) in board.pieces() {
        let count = get_possible_moves(board, pos).len() as i32;
        match piece.color {
            Player::Black => black_moves += count,
            Player::White => white_moves += count,
        }
    }

    f64::from(black_moves - white_moves) * 0.1
}
