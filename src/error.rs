//! Error types for the mentor crate
//!
//! The rules core never fails: illegal requests degrade to empty move lists or
//! fallback results. Errors only come from the surfaces layered on top of it:
//! text parsing, the turn-keeping [`crate::session::GameSession`], and settings
//! persistence.

use crate::rules::GameStatus;
use crate::types::Player;
use thiserror::Error;

/// Errors that can occur outside the pure rules core
#[derive(Error, Debug)]
pub enum MentorError {
    /// Move rejected by the legality layer
    #[error("Illegal move: {message}")]
    IllegalMove { message: String },

    /// The piece on the origin square belongs to the side not on move
    #[error("It is {expected}'s turn to move")]
    NotYourTurn { expected: Player },

    /// The game already reached a terminal status
    #[error("Game is over ({status})")]
    GameOver { status: GameStatus },

    /// Algebraic square text could not be parsed
    #[error("Invalid square: {text:?}")]
    InvalidSquare { text: String },

    /// Board placement text could not be parsed
    #[error("Invalid board placement: {message}")]
    InvalidPlacement { message: String },

    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),
}

/// Result type alias for mentor operations
pub type MentorResult<T> = Result<T, MentorError>;
