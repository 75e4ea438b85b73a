//! Errors raised by the board-evolution core.

use thiserror::Error;

/// The broad category an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong dimensionality, a dimension below 2, or a window that is not 3x3.
    Shape,
    /// A cell outside {0, 1}.
    Value,
    /// An unrecognized setting, such as an unknown edge mode.
    Configuration,
}

/// Errors that can occur while validating or evolving a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// The board has a dimension smaller than 2.
    #[error("board does not contain the correct shape: {rows}x{cols}, both axes must be at least 2")]
    Shape { rows: usize, cols: usize },

    /// The board is not a grid of rows and columns.
    #[error("board must be two-dimensional, found {found} dimension(s)")]
    Dimensionality { found: usize },

    /// The rows of the board do not all have the same length.
    #[error("board is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A flat cell buffer whose length does not match the board shape.
    #[error("board of shape {rows}x{cols} needs {expected} cells, got {found}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("board contains a {value} in index [{row}, {col}]")]
    Value { row: usize, col: usize, value: i64 },

    /// A neighborhood window that is not 3x3.
    #[error("neighborhood must be 3x3, got {rows}x{cols}")]
    NeighborhoodShape { rows: usize, cols: usize },

    /// Unknown edge mode identifier.
    #[error("edge mode not defined: {0:?} (expected \"wrap\" or \"zeros\")")]
    EdgeMode(String),
}

impl LifeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LifeError::Shape { .. }
            | LifeError::Dimensionality { .. }
            | LifeError::Ragged { .. }
            | LifeError::CellCount { .. }
            | LifeError::NeighborhoodShape { .. } => ErrorKind::Shape,
            LifeError::Value { .. } => ErrorKind::Value,
            LifeError::EdgeMode(_) => ErrorKind::Configuration,
        }
    }
}
