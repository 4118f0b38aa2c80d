//! Error types for the Life engine.

use std::fmt;
use thiserror::Error;

/// Which grid dimension failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Number of columns (width)
    Cols,

    /// Number of rows (height)
    Rows,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Cols => write!(f, "column count"),
            Dimension::Rows => write!(f, "row count"),
        }
    }
}

/// Why a pattern stencil is not a usable rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFault {
    /// Pattern has no rows at all
    Empty,

    /// Rows exist but carry no cells
    ZeroWidth,

    /// Row `row` has `found` cells where the first row has `expected`
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ShapeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeFault::Empty => write!(f, "pattern must have at least one row"),
            ShapeFault::ZeroWidth => write!(f, "pattern rows must have at least one cell"),
            ShapeFault::Ragged { row, expected, found } => write!(
                f,
                "pattern row {} has {} cells, expected {}",
                row, found, expected
            ),
        }
    }
}

/// Errors raised while building or seeding a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Grid width or height is zero
    #[error("Invalid dimension: {0} must be greater than 0")]
    InvalidDimension(Dimension),

    /// Pattern is empty or not rectangular
    #[error("Invalid pattern shape: {0}")]
    PatternShapeInvalid(ShapeFault),

    /// Pattern footprint at the requested offset leaves the grid
    #[error(
        "Pattern out of bounds: {pattern_cols}x{pattern_rows} pattern at ({offset_x}, {offset_y}) \
         does not fit a {grid_cols}x{grid_rows} grid"
    )]
    PatternOutOfBounds {
        pattern_cols: usize,
        pattern_rows: usize,
        offset_x: usize,
        offset_y: usize,
        grid_cols: usize,
        grid_rows: usize,
    },
}
