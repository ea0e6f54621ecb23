//! Output formatting and progress helpers for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::{Board, Mark};

/// Create a spinner that animates while a search runs
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print the board as a console grid with coordinate labels
pub fn print_board(board: &Board) {
    println!("\n  0   1   2   3");
    println!("  {}", "-".repeat(15));

    for row in 0..Board::SIZE {
        print!("{row}|");
        for col in 0..Board::SIZE {
            let symbol = match board.cells()[row * Board::SIZE + col] {
                Mark::X => " X ",
                Mark::O => " O ",
                Mark::Empty => "   ",
            };
            print!("{symbol}");
            if col < Board::SIZE - 1 {
                print!("|");
            }
        }
        println!("|");
        if row < Board::SIZE - 1 {
            println!("  {}", "-".repeat(15));
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
