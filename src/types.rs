//! Type definitions and utilities for chess game logic
//!
//! Provides the coordinate, move and side types shared by every module, plus the
//! algebraic notation helpers used by move history and hints.
//!
//! # Coordinates
//!
//! Positions are zero-based `(row, col)` pairs indexed top-to-bottom:
//! row 0 is black's back rank (rank 8), row 7 is white's back rank (rank 1).
//! Column 0 is file 'a'. Fields are signed so that move generation can step
//! off the board and test the result with [`Position::is_within_bounds`].

use crate::error::{MentorError, MentorResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board dimension (rows and columns)
pub const BOARD_SIZE: i8 = 8;

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row holding this side's pieces in the initial position
    pub fn back_rank(self) -> i8 {
        match self {
            Player::White => 7,
            Player::Black => 0,
        }
    }

    /// Row this side's pawns start on
    pub fn pawn_rank(self) -> i8 {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }

    /// Row delta of a pawn step toward the opponent's back rank
    pub fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

/// Board square coordinate (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// True iff both coordinates are in `0..8`
    pub fn is_within_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Position shifted by a (row, col) delta; may leave the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Position::new(self.row + d_row, self.col + d_col)
    }

    /// Create a position from algebraic notation (e.g., "e4")
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_mentor::types::Position;
    /// let e4 = Position::from_algebraic("e4").unwrap();
    /// assert_eq!(e4, Position::new(4, 4));
    /// ```
    pub fn from_algebraic(s: &str) -> MentorResult<Self> {
        let invalid = || MentorError::InvalidSquare {
            text: s.to_string(),
        };

        let mut chars = s.trim().chars();
        let file = chars.next().ok_or_else(invalid)?;
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let col = match file {
            'a'..='h' => (file as u8 - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match rank.to_digit(10) {
            Some(n @ 1..=8) => BOARD_SIZE - n as i8,
            _ => return Err(invalid()),
        };

        Ok(Position::new(row, col))
    }

    /// Convert position to algebraic notation (e.g., "e4")
    ///
    /// Rank 8 is row 0. Out-of-bounds positions render as `"??"`.
    pub fn to_algebraic(self) -> String {
        if !self.is_within_bounds() {
            return "??".to_string();
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = BOARD_SIZE - self.row;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

/// A move from one square to another
///
/// There is no promotion, castling or en passant flag; promotion is inferred
/// when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// Zero-length sentinel returned when no move exists at all
    pub const fn null() -> Self {
        Move::new(Position::new(0, 0), Position::new(0, 0))
    }

    pub fn is_null(self) -> bool {
        self.from == self.to
    }

    /// `"<from>-<to>"` with no disambiguation, check or capture annotation
    pub fn to_text(self) -> String {
        format!("{}-{}", self.from.to_algebraic(), self.to.to_algebraic())
    }

    /// Parse `"e2-e4"` or `"e2e4"`
    pub fn from_text(s: &str) -> MentorResult<Self> {
        let s = s.trim();
        let (from, to) = match s.split_once('-') {
            Some(parts) => parts,
            None if s.len() == 4 && s.is_ascii() => s.split_at(2),
            None => {
                return Err(MentorError::InvalidSquare {
                    text: s.to_string(),
                })
            }
        };
        Ok(Move::new(
            Position::from_algebraic(from)?,
            Position::from_algebraic(to)?,
        ))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// File letter a–h plus rank digit, rank 8 at row 0
pub fn to_algebraic(position: Position) -> String {
    position.to_algebraic()
}

/// Move notation used by the history panel and hints
pub fn move_to_algebraic(mv: Move) -> String {
    mv.to_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_algebraic_corners() {
        assert_eq!(to_algebraic(Position::new(0, 0)), "a8");
        assert_eq!(to_algebraic(Position::new(7, 0)), "a1");
        assert_eq!(to_algebraic(Position::new(7, 7)), "h1");
        assert_eq!(to_algebraic(Position::new(0, 7)), "h8");
        assert_eq!(to_algebraic(Position::new(6, 4)), "e2");
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Position::from_algebraic("e2").unwrap(), Position::new(6, 4));
        assert_eq!(Position::from_algebraic("h8").unwrap(), Position::new(0, 7));
        assert!(Position::from_algebraic("i1").is_err());
        assert!(Position::from_algebraic("a9").is_err());
        assert!(Position::from_algebraic("a0").is_err());
        assert!(Position::from_algebraic("").is_err());
        assert!(Position::from_algebraic("e44").is_err());
    }

    #[test]
    fn test_bounds() {
        assert!(Position::new(0, 0).is_within_bounds());
        assert!(Position::new(7, 7).is_within_bounds());
        assert!(!Position::new(-1, 0).is_within_bounds());
        assert!(!Position::new(0, 8).is_within_bounds());
        assert_eq!(Position::new(-1, 3).to_algebraic(), "??");
    }

    #[test]
    fn test_move_text() {
        let mv = Move::new(Position::new(6, 4), Position::new(4, 4));
        assert_eq!(move_to_algebraic(mv), "e2-e4");
        assert_eq!(Move::from_text("e2-e4").unwrap(), mv);
        assert_eq!(Move::from_text("e2e4").unwrap(), mv);
        assert!(Move::from_text("e2-z9").is_err());
    }

    #[test]
    fn test_player_directions() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::White.forward(), -1);
        assert_eq!(Player::Black.forward(), 1);
        assert_eq!(Player::White.pawn_rank(), 6);
        assert_eq!(Player::Black.back_rank(), 0);
        assert_eq!(Player::Black.to_string(), "black");
    }
}
