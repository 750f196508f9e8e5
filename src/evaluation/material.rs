//! Material evaluation

use crate::pieces::{Piece, PieceKind};
use crate::rules::Board;
use crate::types::Player;

/// Value of capturing `piece`, with the king worth `king_value`
///
/// Tiers disagree about the king: most score it 0, the advanced tier 100.
pub fn capture_value(piece: Piece, king_value: f64) -> f64 {
    match piece.kind {
        PieceKind::King => king_value,
        kind => kind.value(),
    }
}

/// Sum of piece values, black positive (kings excluded)
pub fn material_balance(board: &Board) -> f64 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Player::Black => piece.kind.value(),
            Player::White => -piece.kind.value(),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Square;
    use crate::types::Position;

    #[test]
    fn test_starting_position_material_balance() {
        let board = Board::initial();
        assert_eq!(material_balance(&board), 0.0);
    }

    #[test]
    fn test_white_up_queen() {
        let mut board = Board::initial();
        board.set(Position::new(0, 3), Square::Empty);

        assert_eq!(material_balance(&board), -9.0, "White should be ahead a queen");
    }

    #[test]
    fn test_black_up_pawn() {
        let mut board = Board::initial();
        board.set(Position::new(6, 4), Square::Empty);

        assert_eq!(material_balance(&board), 1.0);
    }

    #[test]
    fn test_king_capture_value_depends_on_tier() {
        let king = Piece::new(PieceKind::King, Player::White);
        let rook = Piece::new(PieceKind::Rook, Player::White);

        assert_eq!(capture_value(king, 0.0), 0.0);
        assert_eq!(capture_value(king, 100.0), 100.0);
        assert_eq!(capture_value(rook, 100.0), 5.0);
    }
}
