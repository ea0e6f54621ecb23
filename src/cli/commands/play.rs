//! Play command - Interactive 4x4 game against the minimax opponent

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;

use crate::board::{Board, Move, Player};
use crate::cli::commands::parse_player_token;
use crate::cli::output::{create_spinner, print_board};
use crate::game::{Game, GameStatus};
use crate::search::MinimaxOpponent;

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the minimax opponent")]
pub struct PlayArgs {
    /// Mark the human plays
    #[arg(long, short = 'm', default_value = "x")]
    pub mark: String,

    /// Resume from a 16-character board string (row-major, `.` `X` `O`)
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Player who makes the first move of a fresh game
    #[arg(long, default_value = "x")]
    pub first: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_player_token(&args.mark, "--mark")?;
    let ai = human.opponent();

    let mut game = match &args.board {
        Some(text) => {
            let board = Board::from_string(text)?;
            let to_move = Game::infer_to_move(&board)?;
            Game::from_position(board, to_move)?
        }
        None => Game::new(parse_player_token(&args.first, "--first")?),
    };

    let opponent = MinimaxOpponent::new(ai);

    println!("Welcome to 4x4 Tic Tac Toe!");
    println!("You are {human}, AI is {ai}");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !game.is_over() {
        print_board(game.board());

        if game.to_move() == human {
            handle_human_turn(&mut game, human, &mut input)?;
        } else {
            handle_ai_turn(&mut game, &opponent)?;
        }
    }

    print_board(game.board());
    print_result(&game, human);

    Ok(())
}

fn handle_human_turn(game: &mut Game, human: Player, input: &mut impl BufRead) -> Result<()> {
    println!("Your turn ({human})");

    loop {
        let Some(mv) = read_move(input)? else {
            bail!("input closed before the game finished");
        };

        if game.play(mv)? {
            return Ok(());
        }

        println!("Invalid move! That cell is already occupied. Try again.");
    }
}

/// Prompt until a well-formed move arrives; `None` means end of input
fn read_move(input: &mut impl BufRead) -> Result<Option<Move>> {
    loop {
        print!("Enter your move (row col): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            println!("Please enter row and column separated by space (e.g., '0 1')");
            continue;
        }

        let (row, col) = match (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
            (Ok(row), Ok(col)) => (row, col),
            _ => {
                println!("Please enter valid numbers");
                continue;
            }
        };

        if row >= Board::SIZE || col >= Board::SIZE {
            println!("Row and column must be between 0 and 3");
            continue;
        }

        return Ok(Some(Move::new(row, col)));
    }
}

fn handle_ai_turn(game: &mut Game, opponent: &MinimaxOpponent) -> Result<()> {
    let spinner = create_spinner("AI is thinking...");
    let mv = opponent.select_move(game.board())?;
    spinner.finish_and_clear();

    if !game.play(mv)? {
        bail!("minimax chose the occupied cell {mv}");
    }

    println!("AI played at position {mv}");
    Ok(())
}

fn print_result(game: &Game, human: Player) {
    println!("{}", "=".repeat(30));
    match game.status() {
        GameStatus::Won(winner) if winner == human => println!("Congratulations! You win!"),
        GameStatus::Won(_) => println!("AI wins! Better luck next time."),
        _ => println!("It's a draw!"),
    }
    println!("{}", "=".repeat(30));
}
