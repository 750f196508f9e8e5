//! Piece identity and square contents
//!
//! A square is either [`Square::Empty`] or holds a [`Piece`] with an explicit
//! kind and owner. The single-letter encoding (uppercase = white) only exists
//! at the text boundary: [`Piece::from_char`] and [`Piece::to_char`].

use crate::types::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Material value used when scoring captures (king counts as 0)
    ///
    /// - Pawn: 1
    /// - Knight/Bishop: 3
    /// - Rook: 5
    /// - Queen: 9
    pub fn value(self) -> f64 {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight | PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 0.0,
        }
    }

    /// Lowercase identity letter
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

/// A piece: kind plus owning side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Player,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Player) -> Self {
        Piece { kind, color }
    }

    /// Decode a case-as-color letter (`'K'` white king, `'p'` black pawn)
    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Some(Piece::new(kind, color))
    }

    pub fn to_char(self) -> char {
        match self.color {
            Player::White => self.kind.letter().to_ascii_uppercase(),
            Player::Black => self.kind.letter(),
        }
    }
}

/// Content of one board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Square {
    pub const fn piece(kind: PieceKind, color: Player) -> Self {
        Square::Occupied(Piece::new(kind, color))
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    pub fn as_piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }

    /// True iff the square holds a piece owned by `player`
    pub fn is_piece_of(self, player: Player) -> bool {
        matches!(self, Square::Occupied(piece) if piece.color == player)
    }

    /// True iff the square holds a `kind` piece of either color
    pub fn is_kind(self, kind: PieceKind) -> bool {
        matches!(self, Square::Occupied(piece) if piece.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip_all_pieces() {
        for c in "KQRBNPkqrbnp".chars() {
            let piece = Piece::from_char(c).unwrap();
            assert_eq!(piece.to_char(), c);
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn test_case_encodes_color() {
        assert_eq!(Piece::from_char('Q').unwrap().color, Player::White);
        assert_eq!(Piece::from_char('q').unwrap().color, Player::Black);
    }

    #[test]
    fn test_square_ownership() {
        let square = Square::piece(PieceKind::Rook, Player::Black);
        assert!(square.is_piece_of(Player::Black));
        assert!(!square.is_piece_of(Player::White));
        assert!(!Square::Empty.is_piece_of(Player::White));
        assert!(!Square::Empty.is_piece_of(Player::Black));
        assert!(square.is_kind(PieceKind::Rook));
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(PieceKind::Pawn.value(), 1.0);
        assert_eq!(PieceKind::Knight.value(), PieceKind::Bishop.value());
        assert_eq!(PieceKind::Queen.value(), 9.0);
        assert_eq!(PieceKind::King.value(), 0.0);
    }
}
