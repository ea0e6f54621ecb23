//! Agent port: a uniform interface over move selection policies

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::Result;
use crate::board::{Board, Move, Player};
use crate::search::MinimaxOpponent;

/// Interface shared by every move selection policy.
///
/// Match runs drive any pairing of agents through this trait; the minimax
/// opponent and the random baseline both implement it.
pub trait Agent: Send {
    /// Select a move for the given board.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Get the agent's name, used in summaries and result output
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Match runs call this once at the start of a run, giving each side
    /// of the pairing its own deterministic seed so results are
    /// reproducible. Deterministic agents can use the default no-op.
    fn set_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

impl Agent for MinimaxOpponent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        MinimaxOpponent::select_move(self, board)
    }

    fn name(&self) -> &str {
        match self.player() {
            Player::X => "minimax (X)",
            Player::O => "minimax (O)",
        }
    }
}

/// Baseline agent that picks uniformly among the empty cells
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent seeded from entropy
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        let moves = board.empty_cells();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
