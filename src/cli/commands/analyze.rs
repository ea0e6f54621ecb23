//! Analyze command - Score every legal move in a position

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::board::{Board, Move, Player};
use crate::cli::commands::parse_player_token;
use crate::cli::output::{print_board, print_kv, print_section};
use crate::game::{Game, GameStatus};
use crate::search::MinimaxOpponent;

#[derive(Parser, Debug)]
#[command(about = "Score every legal move in a position with exhaustive minimax")]
pub struct AnalyzeArgs {
    /// Board position as 16 characters (row-major, `.` `X` `O`)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Side the engine scores for; defaults to the side to move
    #[arg(long)]
    pub player: Option<String>,

    /// Export the scored moves to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let to_move = Game::infer_to_move(&board)?;
    let game = Game::from_position(board, to_move)?;

    if game.status() != GameStatus::InProgress {
        bail!("position is already decided: {:?}", game.status());
    }

    let player = match &args.player {
        Some(value) => parse_player_token(value, "--player")?,
        None => to_move,
    };

    if player != to_move {
        bail!("it is {to_move}'s turn in this position, not {player}'s");
    }

    let engine = MinimaxOpponent::new(player);
    let scored = engine.evaluate_moves(&board);
    let best = engine.select_move(&board)?;

    print_section(&format!("Move analysis for {player}"));
    print_board(&board);

    println!("  {:10} {:>6}", "move", "score");
    for (mv, score) in &scored {
        let marker = if *mv == best { "  <- best" } else { "" };
        println!("  {:10} {:>6}{}", mv.to_string(), score, marker);
    }

    println!();
    print_kv("Candidates", &scored.len().to_string());
    print_kv("Best move", &best.to_string());

    if let Some(export_path) = &args.export {
        export_analysis(&board, player, &scored, best, export_path)?;
        println!("\n✓ Analysis exported to: {}", export_path.display());
    }

    Ok(())
}

fn export_analysis(
    board: &Board,
    player: Player,
    scored: &[(Move, i32)],
    best: Move,
    path: &PathBuf,
) -> Result<()> {
    #[derive(Serialize)]
    struct AnalysisExport {
        board: String,
        player: Player,
        best_move: ScoredMove,
        moves: Vec<ScoredMove>,
    }

    #[derive(Serialize)]
    struct ScoredMove {
        row: usize,
        col: usize,
        score: i32,
    }

    let to_scored = |mv: Move, score: i32| ScoredMove { row: mv.row, col: mv.col, score };

    let best_score = scored
        .iter()
        .find(|(mv, _)| *mv == best)
        .map(|(_, score)| *score)
        .unwrap_or_default();

    let export = AnalysisExport {
        board: board.encode(),
        player,
        best_move: to_scored(best, best_score),
        moves: scored.iter().map(|(mv, score)| to_scored(*mv, *score)).collect(),
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;

    Ok(())
}
