//! Game status classification

use super::board::Board;
use super::check::{get_king_position, is_king_in_check};
use super::legality::has_legal_move;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Classification of a position for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    /// Reserved: no rule in this crate produces it
    Draw,
}

impl GameStatus {
    /// Whether play cannot continue
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }

    pub fn message(self) -> &'static str {
        match self {
            GameStatus::Playing => "Game in progress",
            GameStatus::Check => "Check!",
            GameStatus::Checkmate => "Checkmate!",
            GameStatus::Stalemate => "Stalemate - the game is drawn",
            GameStatus::Draw => "Draw",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Classify the position for `player`, the side about to move
///
/// | legal move | in check | result      |
/// |------------|----------|-------------|
/// | yes        | yes      | `Check`     |
/// | yes        | no       | `Playing`   |
/// | no         | yes      | `Checkmate` |
/// | no         | no       | `Stalemate` |
pub fn check_game_status(board: &Board, player: Player) -> GameStatus {
    if get_king_position(board, player).is_none() {
        warn!("[GAME] Cannot find {} king; treating it as not in check", player);
    }

    let in_check = is_king_in_check(board, player);
    let status = match (has_legal_move(board, player), in_check) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Playing,
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    };

    debug!("[GAME] Status for {}: {}", player, status);
    status
}
