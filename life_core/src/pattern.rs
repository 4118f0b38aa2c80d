//! Seed stencils and placing them onto a grid.

use crate::error::{LifeError, ShapeFault};
use crate::grid::Grid;

/// A rectangular live/dead stencil, independent of any grid.
///
/// Construction does not validate the shape; `Grid::place` does, so a
/// malformed pattern is reported at the point it would be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    /// Creates a pattern from owned rows (top to bottom).
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Creates a pattern by copying a static table.
    pub fn from_static(rows: &[&[bool]]) -> Self {
        Self {
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row (0 for an empty pattern).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Checks that the pattern is a non-empty rectangle.
    pub fn validate(&self) -> Result<(), LifeError> {
        let expected = match self.rows.first() {
            None => return Err(LifeError::PatternShapeInvalid(ShapeFault::Empty)),
            Some(first) => first.len(),
        };

        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(LifeError::PatternShapeInvalid(ShapeFault::Ragged {
                    row,
                    expected,
                    found: cells.len(),
                }));
            }
        }

        if expected == 0 {
            return Err(LifeError::PatternShapeInvalid(ShapeFault::ZeroWidth));
        }

        Ok(())
    }
}

impl Grid {
    /// Stamps `pattern` with its top-left corner at `(offset_x, offset_y)`.
    ///
    /// Pattern cells overwrite the grid (dead cells clear), cells outside the
    /// footprint are untouched. The shape and the fit are checked before
    /// anything is written, so on error the grid is unchanged.
    pub fn place(
        &mut self,
        pattern: &Pattern,
        offset_x: usize,
        offset_y: usize,
    ) -> Result<(), LifeError> {
        pattern.validate()?;

        let fits_rows = offset_y
            .checked_add(pattern.height())
            .map_or(false, |end| end <= self.rows());
        let fits_cols = offset_x
            .checked_add(pattern.width())
            .map_or(false, |end| end <= self.cols());

        if !(fits_rows && fits_cols) {
            return Err(LifeError::PatternOutOfBounds {
                pattern_cols: pattern.width(),
                pattern_rows: pattern.height(),
                offset_x,
                offset_y,
                grid_cols: self.cols(),
                grid_rows: self.rows(),
            });
        }

        for (py, row) in pattern.rows().iter().enumerate() {
            for (px, &alive) in row.iter().enumerate() {
                self.set(offset_x + px, offset_y + py, alive);
            }
        }

        Ok(())
    }

    /// By-value form of [`Grid::place`].
    pub fn with_pattern(
        mut self,
        pattern: &Pattern,
        offset_x: usize,
        offset_y: usize,
    ) -> Result<Self, LifeError> {
        self.place(pattern, offset_x, offset_y)?;
        Ok(self)
    }
}
