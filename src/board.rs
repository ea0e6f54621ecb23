//! Board representation and basic operations for the 4x4 grid

use std::fmt;

use serde::{Deserialize, Serialize};

/// Contents of a single cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }

    /// Convert to the owning player, if the cell is occupied
    pub fn to_player(self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to the mark it places
    pub fn to_mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A (row, col) cell address, each coordinate in 0..4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major cell index (0-15)
    pub fn index(self) -> usize {
        self.row * Board::SIZE + self.col
    }

    /// Inverse of [`index`](Self::index)
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / Board::SIZE,
            col: index % Board::SIZE,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

/// The 4x4 game board.
///
/// This type implements `Copy` since it's 16 one-byte cells; the search
/// relies on cheap independent copies when exploring hypothetical branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; Board::CELL_COUNT],
}

impl Board {
    /// Side length of the board
    pub const SIZE: usize = 4;
    /// Total number of cells
    pub const CELL_COUNT: usize = Self::SIZE * Self::SIZE;

    /// Create a new board with all cells empty
    pub fn new() -> Self {
        Board {
            cells: [Mark::Empty; Self::CELL_COUNT],
        }
    }

    fn index_of(row: usize, col: usize) -> Result<usize, crate::Error> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        Ok(row * Self::SIZE + col)
    }

    /// Get the mark at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is outside 0-3.
    pub fn get(&self, row: usize, col: usize) -> Result<Mark, crate::Error> {
        let idx = Self::index_of(row, col)?;
        Ok(self.cells[idx])
    }

    /// Place a mark at (row, col).
    ///
    /// Writing into an occupied cell is a normal rejected-move outcome:
    /// the call returns `Ok(false)` and the board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is outside 0-3, or if `mark`
    /// is [`Mark::Empty`] (clearing a cell is not a legal operation).
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool, crate::Error> {
        let idx = Self::index_of(row, col)?;
        if mark == Mark::Empty {
            return Err(crate::Error::EmptyMark);
        }
        if self.cells[idx] != Mark::Empty {
            return Ok(false);
        }
        self.cells[idx] = mark;
        Ok(true)
    }

    /// Check whether every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Mark::Empty)
    }

    /// All empty cells in row-major order.
    ///
    /// The fixed enumeration order makes tie-breaks in move selection
    /// reproducible.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Read-only view of the underlying cells, row-major
    pub fn cells(&self) -> &[Mark; Self::CELL_COUNT] {
        &self.cells
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Mark::X => count.x += 1,
                Mark::O => count.o += 1,
                Mark::Empty => {}
            }
        }
        count
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 16 cell characters after whitespace
    /// is filtered out: `.` for empty, `X`/`x`, `O`/`o`.
    ///
    /// # Errors
    ///
    /// Returns an error if the non-whitespace length is not 16 or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != Self::CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: Self::CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Mark::Empty; Self::CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Mark::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Canonical 16-character string representation, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(Self::SIZE) && i + 1 < Self::CELL_COUNT {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
