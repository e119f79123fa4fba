use std::fmt;

use crate::geom::Point;

/// Errors raised when building or querying a [`CostGrid`](crate::CostGrid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A cost lookup outside the grid extent.
    OutOfBounds { pos: Point, size: Point },
    /// The input has no rows.
    Empty,
    /// A row has no cells.
    EmptyRow { row: usize },
    /// Rows have differing lengths.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a decimal digit.
    InvalidDigit { ch: char, pos: Point },
}

impl GridError {
    /// Whether this error rejects the grid itself (as opposed to a query
    /// against a valid grid).
    pub fn is_invalid_grid(&self) -> bool {
        !matches!(self, Self::OutOfBounds { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "grid: position {pos} outside {}x{} grid", size.x, size.y)
            }
            Self::Empty => write!(f, "grid: no rows"),
            Self::EmptyRow { row } => write!(f, "grid: row {row} is empty"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidDigit { ch, pos } => {
                write!(f, "grid: invalid digit \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
