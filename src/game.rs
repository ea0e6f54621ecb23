//! Game sequencing: turn order, status tracking, and move application

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::lines;

/// Current status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// A live game: the board, whose turn it is, and the current status.
///
/// All state changes go through [`play`](Self::play); agents never write
/// into the live board directly.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Start a fresh game with the given player moving first
    pub fn new(first_player: Player) -> Self {
        Game {
            board: Board::new(),
            to_move: first_player,
            status: GameStatus::InProgress,
        }
    }

    /// Resume a game from an existing position.
    ///
    /// The status is recomputed from the board: a completed line wins for
    /// its owner, a full board with no winner is a draw, anything else is
    /// in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if both players hold completed lines, or if the
    /// piece counts are inconsistent with `to_move` (a position neither an
    /// X-first nor an O-first game can reach).
    pub fn from_position(board: Board, to_move: Player) -> Result<Game, crate::Error> {
        let count = board.count_pieces();
        let counts_valid = match to_move {
            Player::X => count.x == count.o || count.o == count.x + 1,
            Player::O => count.x == count.o || count.x == count.o + 1,
        };
        if !counts_valid {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let x_wins = lines::has_won(&board, Player::X);
        let o_wins = lines::has_won(&board, Player::O);
        if x_wins && o_wins {
            return Err(crate::Error::BothPlayersWon);
        }

        let status = if x_wins {
            GameStatus::Won(Player::X)
        } else if o_wins {
            GameStatus::Won(Player::O)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        Ok(Game {
            board,
            to_move,
            status,
        })
    }

    /// Infer whose turn it is from the piece counts, assuming X moved first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPieceCounts`](crate::Error::InvalidPieceCounts) when
    /// the counts fit no X-first game.
    pub fn infer_to_move(board: &Board) -> Result<Player, crate::Error> {
        let count = board.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Apply a move for the player whose turn it is.
    ///
    /// Returns `Ok(false)` without changing any state when the game is
    /// already over or the target cell is occupied; the caller should ask
    /// for another move. After a successful placement the mover's win is
    /// checked first, then the draw condition, and otherwise the turn
    /// passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if the move coordinates are out of range.
    pub fn play(&mut self, mv: Move) -> Result<bool, crate::Error> {
        if self.status != GameStatus::InProgress {
            return Ok(false);
        }

        if !self.board.set(mv.row, mv.col, self.to_move.to_mark())? {
            return Ok(false);
        }

        if lines::has_won(&self.board, self.to_move) {
            self.status = GameStatus::Won(self.to_move);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(true)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winner, if the game ended with one
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}
