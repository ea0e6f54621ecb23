//! quadtac - 4x4 Tic-Tac-Toe with an exhaustive minimax opponent
//!
//! This crate provides:
//! - Complete 4x4 Tic-Tac-Toe game implementation with validation
//! - Minimax search with alpha-beta pruning over the full game tree
//! - Depth-aware scoring that prefers fast wins and slow losses
//! - Agents and a match runner for batch evaluation
//! - A CLI for interactive play, position analysis, and evaluation

pub mod agents;
pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod matches;
pub mod search;

pub use agents::{Agent, RandomAgent};
pub use board::{Board, Mark, Move, Player};
pub use error::{Error, Result};
pub use game::{Game, GameStatus};
pub use matches::{MatchConfig, MatchRunner, MatchSummary};
pub use search::MinimaxOpponent;
