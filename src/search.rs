//! Exhaustive minimax search with alpha-beta pruning

use crate::board::{Board, Move, Player};
use crate::lines;

/// Terminal score magnitude; wins and losses are offset by search depth
const WIN_SCORE: i32 = 10;

/// Computer opponent for a fixed side.
///
/// Selection runs a full-depth minimax over every legal continuation, so
/// the opponent plays perfectly. There is no position cache and no depth
/// cutoff; every call searches the tree it is given to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxOpponent {
    player: Player,
}

impl MinimaxOpponent {
    /// Create an opponent that plays the given side
    pub fn new(player: Player) -> Self {
        MinimaxOpponent { player }
    }

    /// The side this opponent plays
    pub fn player(&self) -> Player {
        self.player
    }

    /// Score a position by recursive minimax with alpha-beta pruning.
    ///
    /// Terminal positions are recognized at the start of every call, in
    /// order: a win for this opponent scores `10 - depth`, a win for the
    /// other side scores `depth - 10`, and a full board scores `0`. The
    /// depth offset makes the search prefer the quickest win and the most
    /// delayed loss; draws score `0` at any depth.
    ///
    /// Non-terminal positions expand every empty cell in row-major order,
    /// copying the board per candidate. Sibling iteration stops as soon as
    /// `beta <= alpha`; the cutoff changes the number of nodes visited,
    /// never the returned score.
    pub fn search(
        &self,
        board: &Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if lines::has_won(board, self.player) {
            return WIN_SCORE - depth;
        }
        if lines::has_won(board, self.player.opponent()) {
            return depth - WIN_SCORE;
        }
        if board.is_full() {
            return 0;
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in board.empty_cells() {
                let child = place(board, mv, self.player);
                let value = self.search(&child, depth + 1, false, alpha, beta);
                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in board.empty_cells() {
                let child = place(board, mv, self.player.opponent());
                let value = self.search(&child, depth + 1, true, alpha, beta);
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Score every legal move from this position.
    ///
    /// Each candidate is applied to a copy of the board and scored with a
    /// fresh full window; the recursion starts at the other side's reply,
    /// with depth 0. Results come back in the board's row-major candidate
    /// order.
    pub fn evaluate_moves(&self, board: &Board) -> Vec<(Move, i32)> {
        board
            .empty_cells()
            .into_iter()
            .map(|mv| {
                let child = place(board, mv, self.player);
                let score = self.search(&child, 0, false, i32::MIN, i32::MAX);
                (mv, score)
            })
            .collect()
    }

    /// Pick the best move for this opponent's side.
    ///
    /// Ties resolve to the first candidate in row-major order, so repeated
    /// calls on the same board return the same move.
    ///
    /// # Errors
    ///
    /// Returns [`NoValidMoves`](crate::Error::NoValidMoves) when the board
    /// has no empty cell.
    pub fn select_move(&self, board: &Board) -> Result<Move, crate::Error> {
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for (mv, score) in self.evaluate_moves(board) {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        best_move.ok_or(crate::Error::NoValidMoves)
    }
}

/// Apply a generated move to a copy of the board.
///
/// Candidates come from `empty_cells`, so the placement cannot fail.
#[must_use = "place returns a new board; the original is unchanged"]
fn place(board: &Board, mv: Move, player: Player) -> Board {
    let mut child = *board;
    let placed = child
        .set(mv.row, mv.col, player.to_mark())
        .expect("moves from empty-cell enumeration are in range");
    debug_assert!(placed, "moves from empty-cell enumeration target empty cells");
    child
}
