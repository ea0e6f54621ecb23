//! quadtac CLI binary
//!
//! Command-line interface for the 4x4 Tic-Tac-Toe engine:
//! - Playing interactive games against the minimax opponent
//! - Analyzing positions with exhaustive move scoring
//! - Evaluating the engine over a series of games

use anyhow::Result;
use clap::{Parser, Subcommand};

use quadtac::cli::commands::{analyze, evaluate, play};

#[derive(Parser)]
#[command(name = "quadtac")]
#[command(version, about = "4x4 Tic-Tac-Toe with an exhaustive minimax opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the minimax opponent
    Play(play::PlayArgs),

    /// Score every legal move in a position
    Analyze(analyze::AnalyzeArgs),

    /// Evaluate the minimax agent over a series of games
    Evaluate(evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
        Commands::Evaluate(args) => evaluate::execute(args),
    }
}
