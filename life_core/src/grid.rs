//! The bounded cell field.
//!
//! A `Grid` is a fixed `cols x rows` matrix of live/dead cells stored
//! row-major. It has no wraparound: anything outside `0..cols` x `0..rows`
//! simply does not exist, which `is_in_bounds` reports for neighbor lookups.

use crate::error::{Dimension, LifeError};
use std::io::{self, Write};

/// Characters used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Drawn for a live cell
    pub live: char,

    /// Drawn for a dead cell
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            live: '■',
            dead: '□',
        }
    }
}

/// Fixed-size 2D field of cells. `true` is live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid of `cols x rows`.
    ///
    /// Both dimensions must be non-zero; the column count is checked first.
    pub fn new(cols: usize, rows: usize) -> Result<Self, LifeError> {
        if cols == 0 {
            return Err(LifeError::InvalidDimension(Dimension::Cols));
        }
        if rows == 0 {
            return Err(LifeError::InvalidDimension(Dimension::Rows));
        }

        Ok(Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True iff `0 <= x < cols` and `0 <= y < rows`.
    pub fn is_in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    /// Cell state at `(x, y)`, or `None` off the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        if x < self.cols && y < self.rows {
            Some(self.cells[y * self.cols + x])
        } else {
            None
        }
    }

    /// Live iff `(x, y)` is on the grid and holds a live cell.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Sets the cell at `(x, y)`. Returns `false` (and writes nothing) off the grid.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        if x < self.cols && y < self.rows {
            self.cells[y * self.cols + x] = alive;
            true
        } else {
            false
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates `(x, y)` of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % cols, i / cols))
    }

    /// Iterates rows top to bottom as cell slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Writes the grid with the default glyphs.
    pub fn render<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        self.render_with(sink, Glyphs::default())
    }

    /// Writes one glyph per cell, one line per row.
    pub fn render_with<W: Write>(&self, sink: &mut W, glyphs: Glyphs) -> io::Result<()> {
        let mut line = String::with_capacity(self.cols * glyphs.live.len_utf8() + 1);
        for row in self.row_slices() {
            line.clear();
            line.extend(row.iter().map(|&alive| if alive { glyphs.live } else { glyphs.dead }));
            line.push('\n');
            sink.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}
