//! Legal move filtering
//!
//! The single place where pseudo-legal moves are checked against self-check.
//! Status classification, the AI tiers, hints and the session all go through
//! these functions so every caller sees the same legal move set.

use super::apply::make_move;
use super::board::Board;
use super::check::is_king_in_check;
use super::piece_moves::{get_possible_moves, pseudo_legal_moves};
use crate::types::{Move, Player, Position};

/// True iff playing `mv` does not leave `player`'s king in check
pub fn is_legal_for(board: &Board, mv: Move, player: Player) -> bool {
    !is_king_in_check(&make_move(board, mv), player)
}

/// All legal moves for `player` in row-major, per-piece generation order
pub fn legal_moves_for_player(board: &Board, player: Player) -> Vec<Move> {
    pseudo_legal_moves(board, player)
        .into_iter()
        .filter(|&mv| is_legal_for(board, mv, player))
        .collect()
}

/// Legal destinations for the piece on `position` (empty square: none)
pub fn legal_destinations(board: &Board, position: Position) -> Vec<Position> {
    let Some(piece) = board.get(position).as_piece() else {
        return Vec::new();
    };
    get_possible_moves(board, position)
        .into_iter()
        .filter(|&to| is_legal_for(board, Move::new(position, to), piece.color))
        .collect()
}

/// True iff `mv` moves one of `player`'s pieces to a legal destination
pub fn is_legal_move(board: &Board, mv: Move, player: Player) -> bool {
    board.get(mv.from).is_piece_of(player) && legal_destinations(board, mv.from).contains(&mv.to)
}

/// Short-circuiting check for at least one legal move
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.pieces_of(player).any(|(from, _)| {
        get_possible_moves(board, from)
            .into_iter()
            .any(|to| is_legal_for(board, Move::new(from, to), player))
    })
}
