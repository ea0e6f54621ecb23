//! Error types for the quadtac crate

use thiserror::Error;

/// Main error type for the quadtac crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {col}) is out of range (rows and columns run 0-3)")]
    InvalidPosition { row: usize, col: usize },

    #[error("cannot place an empty mark; only X or O may be written")]
    EmptyMark,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("both players hold completed lines; position is unreachable")]
    BothPlayersWon,

    #[error("legal move from empty-cell enumeration failed unexpectedly: {message}")]
    LegalMoveFailed { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
