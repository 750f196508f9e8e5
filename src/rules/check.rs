//! King lookup and check detection

use super::board::Board;
use super::piece_moves::get_possible_moves;
use crate::pieces::PieceKind;
use crate::types::{Player, Position};

/// First square (row-major) holding `player`'s king
pub fn get_king_position(board: &Board, player: Player) -> Option<Position> {
    board
        .pieces_of(player)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(pos, _)| pos)
}

/// True iff `position` is a pseudo-legal destination of any `attacker` piece
pub fn is_square_attacked(board: &Board, position: Position, attacker: Player) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, _)| get_possible_moves(board, from).contains(&position))
}

/// True iff an opponent piece can reach `player`'s king square
///
/// A board without that king reports "not in check".
pub fn is_king_in_check(board: &Board, player: Player) -> bool {
    match get_king_position(board, player) {
        Some(king) => is_square_attacked(board, king, player.opponent()),
        None => false,
    }
}
