//! Evaluate command - Run the minimax opponent through a match series

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::agents::{Agent, RandomAgent};
use crate::board::Board;
use crate::cli::commands::parse_player_token;
use crate::cli::output::format_number;
use crate::matches::{MatchConfig, MatchRunner, MatchSummary};
use crate::search::MinimaxOpponent;

#[derive(Parser, Debug)]
#[command(about = "Evaluate the minimax agent over a series of games")]
pub struct EvaluateArgs {
    /// Opponent to evaluate against
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which mark the minimax agent controls (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: String,

    /// Which mark makes the first move of each game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: String,

    /// Starting position as 16 characters (fresh board when omitted)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Suppress the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let agent_player = parse_player_token(&args.agent_player, "--agent-player")?;
    let first_player = parse_player_token(&args.first_player, "--first-player")?;

    let start_board = match &args.board {
        Some(text) => Some(Board::from_string(text)?),
        None => None,
    };

    let mut opponent: Box<dyn Agent> = match args.opponent.to_lowercase().as_str() {
        "random" => Box::new(RandomAgent::new("random".to_string())),
        "minimax" => Box::new(MinimaxOpponent::new(agent_player.opponent())),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown opponent type: '{other}'. Supported: random, minimax"
            ));
        }
    };

    println!("\n=== Evaluation Configuration ===");
    println!("Opponent: {}", opponent.name());
    println!("Agent plays as: {agent_player} (first player: {first_player})");
    println!("Games: {}", format_number(args.games));
    if let Some(seed) = args.seed {
        println!("Seed: {seed}");
    }
    if let Some(board) = &start_board {
        println!("Start position: {}", board.encode());
    }

    let config = MatchConfig {
        games: args.games,
        seed: args.seed,
        agent_player,
        first_player,
        start_board,
    };

    let mut runner = MatchRunner::new(config.clone());
    if !args.quiet {
        runner = runner.with_progress();
    }

    let mut agent = MinimaxOpponent::new(agent_player);

    println!("\n=== Running Evaluation ===");
    let summary = runner.run(&mut agent, opponent.as_mut())?;

    println!("\n=== Evaluation Results ===");
    println!("Total games: {}", format_number(summary.total_games));
    println!("Wins: {} ({:.1}%)", summary.wins, summary.win_rate * 100.0);
    println!("Draws: {} ({:.1}%)", summary.draws, summary.draw_rate * 100.0);
    println!(
        "Losses: {} ({:.1}%)",
        summary.losses,
        summary.loss_rate * 100.0
    );

    if let Some(export_path) = &args.export {
        export_results(&summary, &config, export_path)?;
        println!("\n✓ Results exported to: {}", export_path.display());
    }

    Ok(())
}

/// Export evaluation results to JSON
fn export_results(summary: &MatchSummary, config: &MatchConfig, path: &PathBuf) -> Result<()> {
    use std::fs::File;

    use crate::board::Player;

    #[derive(Serialize)]
    struct EvaluationExport {
        evaluation: EvaluationSection,
        configuration: ConfigurationSection,
    }

    #[derive(Serialize)]
    struct EvaluationSection {
        agent: String,
        opponent: String,
        total_games: usize,
        wins: usize,
        draws: usize,
        losses: usize,
        win_rate: f64,
        draw_rate: f64,
        loss_rate: f64,
    }

    #[derive(Serialize)]
    struct ConfigurationSection {
        agent_player: Player,
        first_player: Player,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        start_position: Option<String>,
    }

    let export = EvaluationExport {
        evaluation: EvaluationSection {
            agent: summary.agent.clone(),
            opponent: summary.opponent.clone(),
            total_games: summary.total_games,
            wins: summary.wins,
            draws: summary.draws,
            losses: summary.losses,
            win_rate: summary.win_rate,
            draw_rate: summary.draw_rate,
            loss_rate: summary.loss_rate,
        },
        configuration: ConfigurationSection {
            agent_player: config.agent_player,
            first_player: config.first_player,
            seed: config.seed,
            start_position: config.start_board.as_ref().map(Board::encode),
        },
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
