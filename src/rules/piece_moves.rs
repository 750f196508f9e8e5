//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move.
//! Pure functions with no side effects - easy to test.
//!
//! Generation is pseudo-legal: destinations that would leave the mover's own
//! king in check are still listed. Filtering happens in [`super::legality`].
//!
//! Destination order is fixed per piece and is part of the observable
//! behaviour (it breaks ties in move selection):
//! - pawn: single push, double push, capture toward col-1, capture toward col+1
//! - sliders: rook rays (right, left, down, up) then bishop rays
//!   (down-right, down-left, up-right, up-left)
//! - knight/king: fixed offset tables below

use super::board::Board;
use crate::pieces::{Piece, PieceKind};
use crate::types::{Move, Player, Position};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Get all pseudo-legal destinations for the piece on `position`
///
/// Empty or out-of-bounds squares yield an empty list.
pub fn get_possible_moves(board: &Board, position: Position) -> Vec<Position> {
    let Some(piece) = board.get(position).as_piece() else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, position, piece.color, &mut moves),
        PieceKind::Knight => step_moves(board, position, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step_moves(board, position, piece, &KING_OFFSETS, &mut moves),
        PieceKind::Rook => sliding_moves(board, position, piece, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Bishop => {
            sliding_moves(board, position, piece, &BISHOP_DIRECTIONS, &mut moves)
        }
        PieceKind::Queen => {
            sliding_moves(board, position, piece, &ROOK_DIRECTIONS, &mut moves);
            sliding_moves(board, position, piece, &BISHOP_DIRECTIONS, &mut moves);
        }
    }
    moves
}

/// Every pseudo-legal move for `player`, board scanned row-major
pub fn pseudo_legal_moves(board: &Board, player: Player) -> Vec<Move> {
    board
        .pieces_of(player)
        .flat_map(|(from, _)| {
            get_possible_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Whether `target` may be entered by `mover`: empty or enemy-held
fn is_open_to(board: &Board, target: Position, mover: Player) -> bool {
    target.is_within_bounds() && !board.get(target).is_piece_of(mover)
}

fn pawn_moves(board: &Board, from: Position, color: Player, moves: &mut Vec<Position>) {
    let direction = color.forward();

    // Forward move
    let one = from.offset(direction, 0);
    if one.is_within_bounds() && board.is_empty(one) {
        moves.push(one);

        // Double move from starting rank
        if from.row == color.pawn_rank() {
            let two = from.offset(2 * direction, 0);
            if two.is_within_bounds() && board.is_empty(two) {
                moves.push(two);
            }
        }
    }

    // Capture diagonally; no en passant
    for d_col in [-1, 1] {
        let target = from.offset(direction, d_col);
        if target.is_within_bounds() && board.get(target).is_piece_of(color.opponent()) {
            moves.push(target);
        }
    }
}

fn step_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    for &(d_row, d_col) in offsets {
        let target = from.offset(d_row, d_col);
        if is_open_to(board, target, piece.color) {
            moves.push(target);
        }
    }
}

fn sliding_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Position>,
) {
    for &(d_row, d_col) in directions {
        let mut target = from.offset(d_row, d_col);
        while target.is_within_bounds() {
            match board.get(target).as_piece() {
                None => moves.push(target),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        moves.push(target);
                    }
                    break;
                }
            }
            target = target.offset(d_row, d_col);
        }
    }
}
