//! Move application

use super::board::Board;
use crate::pieces::{PieceKind, Square};
use crate::types::Move;

/// Produce the board that results from playing `mv`
///
/// The input board is never mutated. Whatever stood on the destination is
/// discarded (that is how captures happen). A pawn reaching the far back rank
/// becomes a queen of its color. No legality checking is done here; a move
/// that leaves the mover in check is applied all the same.
///
/// Out-of-bounds or zero-length moves and moves from an empty square return an
/// unchanged copy.
pub fn make_move(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    if mv.is_null() || !mv.from.is_within_bounds() || !mv.to.is_within_bounds() {
        return next;
    }
    let Some(mut piece) = board.get(mv.from).as_piece() else {
        return next;
    };

    if piece.kind == PieceKind::Pawn && mv.to.row == piece.color.opponent().back_rank() {
        piece.kind = PieceKind::Queen;
    }

    next.set(mv.to, Square::Occupied(piece));
    next.set(mv.from, Square::Empty);
    next
}
