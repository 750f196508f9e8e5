//! Pawn structure evaluation
//!
//! Doubled and isolated pawns are weaknesses (±0.5 per affected file), passed
//! pawns are strengths (±1 each). Every term is signed toward black.

use crate::pieces::{Piece, PieceKind, Square};
use crate::rules::Board;
use crate::types::{Player, Position};

const DOUBLED_PENALTY: f64 = 0.5;
const ISOLATED_PENALTY: f64 = 0.5;
const PASSED_BONUS: f64 = 1.0;

fn pawn_of(color: Player) -> Square {
    Square::Occupied(Piece::new(PieceKind::Pawn, color))
}

/// Number of `color` pawns on each file
fn pawn_files(board: &Board, color: Player) -> [u8; 8] {
    let mut files = [0u8; 8];
    for (pos, piece) in board.pieces_of(color) {
        if piece.kind == PieceKind::Pawn {
            files[pos.col as usize] += 1;
        }
    }
    files
}

fn doubled_files(files: &[u8; 8]) -> usize {
    files.iter().filter(|&&count| count > 1).count()
}

fn isolated_files(files: &[u8; 8]) -> usize {
    (0..8)
        .filter(|&col| {
            let left = if col > 0 { files[col - 1] } else { 0 };
            let right = if col < 7 { files[col + 1] } else { 0 };
            files[col] > 0 && left == 0 && right == 0
        })
        .count()
}

/// No opposing pawn on the same or adjacent files anywhere ahead
fn is_passed(board: &Board, pos: Position, color: Player) -> bool {
    let enemy_pawn = pawn_of(color.opponent());
    let ahead: Vec<i8> = match color {
        Player::White => (0..pos.row).collect(),
        Player::Black => (pos.row + 1..8).collect(),
    };

    !ahead.iter().any(|&row| {
        (pos.col - 1..=pos.col + 1)
            .map(|col| Position::new(row, col))
            .filter(|p| p.is_within_bounds())
            .any(|p| board.get(p) == enemy_pawn)
    })
}

/// Passed pawns for `color`, counting only pawns on rows 1 through 6
fn passed_pawns(board: &Board, color: Player) -> usize {
    board
        .pieces_of(color)
        .filter(|&(pos, piece)| {
            piece.kind == PieceKind::Pawn && (1..7).contains(&pos.row) && is_passed(board, pos, color)
        })
        .count()
}

/// Combined pawn-structure score, positive favoring black
pub fn evaluate_pawn_structure(board: &Board) -> f64 {
    let white = pawn_files(board, Player::White);
    let black = pawn_files(board, Player::Black);

    let weakness = |files: &[u8; 8]| {
        doubled_files(files) as f64 * DOUBLED_PENALTY + isolated_files(files) as f64 * ISOLATED_PENALTY
    };

    let mut score = weakness(&white) - weakness(&black);
    score += passed_pawns(board, Player::Black) as f64 * PASSED_BONUS;
    score -= passed_pawns(board, Player::White) as f64 * PASSED_BONUS;
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_pawns(white: &[(i8, i8)], black: &[(i8, i8)]) -> Board {
        let mut board = Board::empty();
        for &(row, col) in white {
            board.set(Position::new(row, col), pawn_of(Player::White));
        }
        for &(row, col) in black {
            board.set(Position::new(row, col), pawn_of(Player::Black));
        }
        board
    }

    #[test]
    fn test_initial_structure_is_neutral() {
        assert_eq!(evaluate_pawn_structure(&Board::initial()), 0.0);
    }

    #[test]
    fn test_white_doubled_isolated_pawns_favor_black() {
        //! Two white pawns on the a-file: doubled (+0.5) and isolated (+0.5),
        //! and the more advanced one faces no black pawns, so both are passed
        let board = board_with_pawns(&[(6, 0), (5, 0)], &[]);
        assert_eq!(evaluate_pawn_structure(&board), 1.0 - 2.0);
    }

    #[test]
    fn test_black_passed_pawn() {
        //! Lone black pawn on d4 is isolated (-0.5) but passed (+1)
        let board = board_with_pawns(&[], &[(4, 3)]);
        assert_eq!(evaluate_pawn_structure(&board), 0.5);
    }

    #[test]
    fn test_adjacent_enemy_pawn_stops_passer() {
        //! White pawn on e2 sits ahead of the black d3 pawn on an adjacent file
        let board = board_with_pawns(&[(6, 4)], &[(5, 3)]);
        // both isolated (cancel), neither passed
        assert_eq!(evaluate_pawn_structure(&board), 0.0);
    }

    #[test]
    fn test_pawns_on_edge_rows_are_not_counted_as_passed() {
        let board = board_with_pawns(&[], &[(7, 3)]);
        assert_eq!(evaluate_pawn_structure(&board), -0.5);
    }
}
