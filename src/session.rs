//! Turn-keeping game session
//!
//! [`GameSession`] owns the authoritative board and the side to move, and
//! routes every committed move through the legality layer. The human plays
//! white; [`GameSession::play_ai_turn`] plays black at the session's
//! difficulty.
//!
//! # Turn cycle
//!
//! 1. `legal_destinations` for highlighting a selected piece
//! 2. `play_move` to commit white's move (status re-classified for black)
//! 3. `play_ai_turn` to answer (status re-classified for white)
//! 4. `hint` at any time, without touching the board
//!
//! Once the status is terminal every further move is rejected with
//! [`MentorError::GameOver`].

use crate::ai::{
    generate_ai_move, get_ai_move_explanation, get_suggestion, AIMoveResult, Difficulty,
    Suggestion, AI_PLAYER,
};
use crate::error::{MentorError, MentorResult};
use crate::pieces::Piece;
use crate::rules::{check_game_status, is_legal_move, legal_destinations, make_move, Board, GameStatus};
use crate::types::{move_to_algebraic, Move, Player, Position};
use serde::Serialize;
use tracing::{debug, info};

/// One committed move
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    /// Position before the move was played
    pub board_before: Board,
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    /// Status of the side to move afterwards
    pub status_after: GameStatus,
}

/// A numbered row of the history table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovePair {
    pub number: usize,
    pub white: String,
    pub black: Option<String>,
}

/// Moves played so far, white first
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    /// Group moves into `1. e2-e4 e7-e5` style pairs
    pub fn numbered(&self) -> Vec<MovePair> {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| MovePair {
                number: i + 1,
                white: move_to_algebraic(pair[0].mv),
                black: pair.get(1).map(|record| move_to_algebraic(record.mv)),
            })
            .collect()
    }
}

/// A game between a human (white) and the automated opponent (black)
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Player,
    status: GameStatus,
    difficulty: Difficulty,
    history: MoveHistory,
    last_ai_move: Option<AIMoveResult>,
    last_explanation: Option<String>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::initial(),
            turn: Player::White,
            status: GameStatus::Playing,
            difficulty,
            history: MoveHistory::default(),
            last_ai_move: None,
            last_explanation: None,
        }
    }

    /// Start over from the initial position, keeping the difficulty
    pub fn reset(&mut self) {
        info!("[GAME] New game ({})", self.difficulty);
        *self = Self::new(self.difficulty);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn last_ai_move(&self) -> Option<&AIMoveResult> {
        self.last_ai_move.as_ref()
    }

    pub fn last_explanation(&self) -> Option<&str> {
        self.last_explanation.as_deref()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Legal destinations for the piece on `position`
    ///
    /// Empty for an empty square, a piece of the side not on move, or a
    /// finished game.
    pub fn legal_destinations(&self, position: Position) -> Vec<Position> {
        if self.is_over() || !self.board.get(position).is_piece_of(self.turn) {
            return Vec::new();
        }
        legal_destinations(&self.board, position)
    }

    /// Commit `mv` for the side to move and return the new status
    pub fn play_move(&mut self, mv: Move) -> MentorResult<GameStatus> {
        if self.is_over() {
            return Err(MentorError::GameOver {
                status: self.status,
            });
        }

        let Some(piece) = self.board.get(mv.from).as_piece() else {
            return Err(MentorError::IllegalMove {
                message: format!("no piece on {}", mv.from),
            });
        };
        if piece.color != self.turn {
            return Err(MentorError::NotYourTurn {
                expected: self.turn,
            });
        }
        if !is_legal_move(&self.board, mv, self.turn) {
            return Err(MentorError::IllegalMove {
                message: format!("{} cannot move {}", piece.kind.name(), mv),
            });
        }

        let captured = self.board.get(mv.to).as_piece();
        let next_board = make_move(&self.board, mv);
        let next_turn = self.turn.opponent();
        let status = check_game_status(&next_board, next_turn);

        debug!("[GAME] {} plays {} ({})", self.turn, mv, piece.kind.name());
        if status != self.status {
            log_transition(status, next_turn);
        }

        self.history.add_move(MoveRecord {
            board_before: std::mem::replace(&mut self.board, next_board),
            mv,
            piece,
            captured,
            status_after: status,
        });
        self.turn = next_turn;
        self.status = status;
        Ok(status)
    }

    /// Let the automated side choose and play its move
    pub fn play_ai_turn(&mut self) -> MentorResult<AIMoveResult> {
        if self.is_over() {
            return Err(MentorError::GameOver {
                status: self.status,
            });
        }
        if self.turn != AI_PLAYER {
            return Err(MentorError::NotYourTurn {
                expected: self.turn,
            });
        }

        let result = generate_ai_move(&self.board, self.difficulty);
        let explanation = get_ai_move_explanation(&self.board, &result);
        self.play_move(result.mv)?;

        info!("[AI] {}: {}", result.mv, explanation);
        self.last_explanation = Some(explanation);
        self.last_ai_move = Some(result.clone());
        Ok(result)
    }

    /// Suggested move for white on the current board
    pub fn hint(&self) -> Suggestion {
        get_suggestion(&self.board)
    }
}

fn log_transition(status: GameStatus, to_move: Player) {
    match status {
        GameStatus::Check => info!("[GAME] {} king is in check", to_move),
        GameStatus::Checkmate => info!(
            "[GAME] Checkmate! {} wins",
            to_move.opponent()
        ),
        GameStatus::Stalemate => info!("[GAME] Stalemate: {} has no legal moves", to_move),
        GameStatus::Playing | GameStatus::Draw => debug!("[GAME] Status now {}", status),
    }
}
