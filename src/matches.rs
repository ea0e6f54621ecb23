//! Head-to-head match running with aggregate summaries

use std::fs::File;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::board::{Board, Player};
use crate::game::Game;
use crate::{Error, Result};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Base random seed; when set, both agents are seeded before the run
    pub seed: Option<u64>,

    /// Which side the primary agent plays
    pub agent_player: Player,

    /// Which player opens each game
    pub first_player: Player,

    /// Optional starting position; the side to move is inferred from the
    /// piece counts, and `first_player` only applies to fresh games
    pub start_board: Option<Board>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            agent_player: Player::X,
            first_player: Player::X,
            start_board: None,
        }
    }
}

/// Aggregate result of a match series.
///
/// Only tallies are recorded; individual games are not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Total games played
    pub total_games: usize,

    /// Wins for the primary agent
    pub wins: usize,

    /// Draws
    pub draws: usize,

    /// Losses for the primary agent
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,

    /// Name of the primary agent
    pub agent: String,

    /// Name of the opposing agent
    pub opponent: String,
}

impl MatchSummary {
    /// Create a new match summary, computing the rates from the tallies
    pub fn new(
        total_games: usize,
        wins: usize,
        draws: usize,
        losses: usize,
        agent: String,
        opponent: String,
    ) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            agent,
            opponent,
        }
    }

    /// Save the summary to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create summary file {path:?}"),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a summary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open summary file {path:?}"),
            source,
        })?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}

/// Runs a series of games between two agents
pub struct MatchRunner {
    config: MatchConfig,
    show_progress: bool,
}

impl MatchRunner {
    /// Create a new match runner
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Display an indicatif progress bar while the series runs
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Play the configured number of games and tally the outcomes from the
    /// primary agent's perspective.
    ///
    /// # Errors
    ///
    /// Returns an error if an agent produces an occupied or out-of-range
    /// move, or if the starting position is invalid.
    pub fn run(&self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchSummary> {
        if let Some(seed) = self.config.seed {
            agent.set_seed(seed)?;
            opponent.set_seed(seed.wrapping_add(1))?;
        }

        let progress = if self.show_progress {
            Some(self.create_progress()?)
        } else {
            None
        };

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for _ in 0..self.config.games {
            match self.play_game(agent, opponent)? {
                Some(winner) if winner == self.config.agent_player => wins += 1,
                Some(_) => losses += 1,
                None => draws += 1,
            }

            if let Some(pb) = &progress {
                pb.inc(1);
                pb.set_message(format!("W:{wins} D:{draws} L:{losses}"));
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message(format!("W:{wins} D:{draws} L:{losses}"));
        }

        Ok(MatchSummary::new(
            self.config.games,
            wins,
            draws,
            losses,
            agent.name().to_string(),
            opponent.name().to_string(),
        ))
    }

    fn create_progress(&self) -> Result<ProgressBar> {
        let pb = ProgressBar::new(self.config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        Ok(pb)
    }

    /// Play one game to completion; returns the winner, or `None` for a draw
    fn play_game(&self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<Option<Player>> {
        let mut game = match self.config.start_board {
            Some(board) => Game::from_position(board, Game::infer_to_move(&board)?)?,
            None => Game::new(self.config.first_player),
        };

        while !game.is_over() {
            let is_agent_turn = game.to_move() == self.config.agent_player;
            let actor: &mut dyn Agent = if is_agent_turn { agent } else { opponent };

            let mv = actor.select_move(game.board())?;
            if !game.play(mv)? {
                return Err(Error::LegalMoveFailed {
                    message: format!("agent '{}' chose occupied cell {}", actor.name(), mv),
                });
            }
        }

        Ok(game.winner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::board::Move;
    use crate::search::MinimaxOpponent;

    #[test]
    fn test_match_runner_plays_all_games() {
        let config = MatchConfig {
            games: 10,
            seed: Some(42),
            ..Default::default()
        };

        let mut agent = RandomAgent::new("agent".to_string());
        let mut opponent = RandomAgent::new("opponent".to_string());
        let summary = MatchRunner::new(config).run(&mut agent, &mut opponent).unwrap();

        assert_eq!(summary.total_games, 10);
        assert_eq!(summary.wins + summary.draws + summary.losses, 10);
        assert_eq!(summary.agent, "agent");
        assert_eq!(summary.opponent, "opponent");
    }

    #[test]
    fn test_match_runner_is_seed_deterministic() {
        let config = MatchConfig {
            games: 20,
            seed: Some(7),
            ..Default::default()
        };

        let run = || {
            let mut agent = RandomAgent::new("a".to_string());
            let mut opponent = RandomAgent::new("b".to_string());
            MatchRunner::new(config.clone())
                .run(&mut agent, &mut opponent)
                .unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first.wins, second.wins);
        assert_eq!(first.draws, second.draws);
        assert_eq!(first.losses, second.losses);
    }

    #[test]
    fn test_minimax_takes_the_win_from_a_start_position() {
        // X completes row 0 on the first move of every game
        let start = Board::from_string("XXX.OOO.........").unwrap();
        let config = MatchConfig {
            games: 3,
            seed: Some(1),
            start_board: Some(start),
            ..Default::default()
        };

        let mut agent = MinimaxOpponent::new(Player::X);
        let mut opponent = RandomAgent::new("random".to_string());
        let summary = MatchRunner::new(config).run(&mut agent, &mut opponent).unwrap();

        assert_eq!(summary.wins, 3);
        assert_eq!(summary.losses, 0);
        assert_eq!(summary.win_rate, 1.0);
    }

    struct StuckAgent;

    impl Agent for StuckAgent {
        fn select_move(&mut self, _board: &Board) -> Result<Move> {
            Ok(Move::new(0, 0))
        }

        fn name(&self) -> &str {
            "stuck"
        }
    }

    #[test]
    fn test_illegal_agent_move_is_reported() {
        // (0,0) is already taken, so the stuck agent repeats an occupied cell
        let start = Board::from_string("X...O...........").unwrap();
        let config = MatchConfig {
            games: 1,
            start_board: Some(start),
            ..Default::default()
        };

        let mut agent = StuckAgent;
        let mut opponent = RandomAgent::with_seed("random".to_string(), 3);
        let result = MatchRunner::new(config).run(&mut agent, &mut opponent);

        assert!(matches!(result, Err(Error::LegalMoveFailed { .. })));
    }
}
