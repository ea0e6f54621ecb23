//! Winning line detection for the 4x4 board

use crate::board::{Board, Mark, Player};

/// Row line indices on the 4x4 board
pub const ROW_LINES: [[usize; 4]; 4] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
];

/// Column line indices on the 4x4 board
pub const COLUMN_LINES: [[usize; 4]; 4] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
];

/// Main diagonal, (0,0) through (3,3)
pub const MAIN_DIAGONAL: [usize; 4] = [0, 5, 10, 15];

/// Anti-diagonal, (0,3) through (3,0)
pub const ANTI_DIAGONAL: [usize; 4] = [3, 6, 9, 12];

fn line_complete(board: &Board, line: &[usize; 4], target: Mark) -> bool {
    line.iter().all(|&idx| board.cells()[idx] == target)
}

/// Check if the player holds all four cells of some row
pub fn row_win(board: &Board, player: Player) -> bool {
    let target = player.to_mark();
    ROW_LINES
        .iter()
        .any(|line| line_complete(board, line, target))
}

/// Check if the player holds all four cells of some column
pub fn column_win(board: &Board, player: Player) -> bool {
    let target = player.to_mark();
    COLUMN_LINES
        .iter()
        .any(|line| line_complete(board, line, target))
}

/// Check if the player holds the main diagonal
pub fn main_diagonal_win(board: &Board, player: Player) -> bool {
    line_complete(board, &MAIN_DIAGONAL, player.to_mark())
}

/// Check if the player holds the anti-diagonal
pub fn anti_diagonal_win(board: &Board, player: Player) -> bool {
    line_complete(board, &ANTI_DIAGONAL, player.to_mark())
}

/// Check if the player has completed any row, column, or diagonal
pub fn has_won(board: &Board, player: Player) -> bool {
    row_win(board, player)
        || column_win(board, player)
        || main_diagonal_win(board, player)
        || anti_diagonal_win(board, player)
}
