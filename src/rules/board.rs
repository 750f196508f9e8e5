//! Board representation
//!
//! [`Board`] is an 8×8 grid of [`Square`] values. Boards are value snapshots:
//! move application clones and returns a new board, so earlier positions stay
//! valid and comparable.

use crate::error::{MentorError, MentorResult};
use crate::pieces::{Piece, PieceKind, Square};
use crate::types::{Player, Position, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard starting placement, row 0 first
pub const INITIAL_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// True iff both coordinates are in `0..8`
pub fn is_within_bounds(position: Position) -> bool {
    position.is_within_bounds()
}

/// True iff `square` is non-empty and owned by `player`
pub fn is_piece_of_player(square: Square, player: Player) -> bool {
    square.is_piece_of(player)
}

/// The sole piece-placement state
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// Standard starting position (black on rows 0-1, white on rows 6-7)
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let col = col as i8;
            board.set(Position::new(0, col), Square::piece(kind, Player::Black));
            board.set(
                Position::new(1, col),
                Square::piece(PieceKind::Pawn, Player::Black),
            );
            board.set(
                Position::new(6, col),
                Square::piece(PieceKind::Pawn, Player::White),
            );
            board.set(Position::new(7, col), Square::piece(kind, Player::White));
        }
        board
    }

    /// Build a board from `(piece, position)` pairs on an otherwise empty grid
    pub fn with_pieces(pieces: &[(Piece, Position)]) -> Self {
        let mut board = Board::empty();
        for &(piece, pos) in pieces {
            board.set(pos, Square::Occupied(piece));
        }
        board
    }

    /// Square content; out-of-bounds positions read as empty
    pub fn get(&self, pos: Position) -> Square {
        if !pos.is_within_bounds() {
            return Square::Empty;
        }
        self.squares[pos.row as usize][pos.col as usize]
    }

    /// Overwrite a square; out-of-bounds writes are ignored
    pub fn set(&mut self, pos: Position, square: Square) {
        if pos.is_within_bounds() {
            self.squares[pos.row as usize][pos.col as usize] = square;
        }
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Owner of the piece on `pos`, if any
    pub fn piece_color(&self, pos: Position) -> Option<Player> {
        self.get(pos).as_piece().map(|piece| piece.color)
    }

    /// All occupied squares in row-major order (row 0 first)
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let pos = Position::new(row, col);
                self.get(pos).as_piece().map(|piece| (pos, piece))
            })
        })
    }

    /// Occupied squares owned by `player`, row-major
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == player)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Placement text (rows from row 0, `/`-separated, digits for empty runs)
    pub fn to_placement(&self) -> String {
        let mut rows = Vec::with_capacity(8);
        for row in &self.squares {
            let mut text = String::new();
            let mut empties = 0;
            for square in row {
                match square {
                    Square::Empty => empties += 1,
                    Square::Occupied(piece) => {
                        if empties > 0 {
                            text.push_str(&empties.to_string());
                            empties = 0;
                        }
                        text.push(piece.to_char());
                    }
                }
            }
            if empties > 0 {
                text.push_str(&empties.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = MentorError;

    /// Parse placement text; a full FEN string is accepted and only its first
    /// field is read.
    fn from_str(s: &str) -> MentorResult<Self> {
        let placement = s.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(MentorError::InvalidPlacement {
                message: format!("expected 8 rows, found {}", rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| MentorError::InvalidPlacement {
                        message: format!("unknown piece letter {:?} in row {}", c, row),
                    })?;
                    if col < 8 {
                        board.squares[row][col] = Square::Occupied(piece);
                    }
                    col += 1;
                }
            }
            if col != 8 {
                return Err(MentorError::InvalidPlacement {
                    message: format!("row {} does not describe 8 squares", row),
                });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - row)?;
            for square in squares {
                let c = square.as_piece().map(Piece::to_char).unwrap_or('.');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
