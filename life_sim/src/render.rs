//! Frame output.

use life_core::{Glyphs, Grid};
use std::io::{self, Stdout, Write};

/// Draws a grid to some output. Must not modify the grid.
pub trait Renderer {
    /// Writes one frame.
    fn render(&mut self, grid: &Grid) -> io::Result<()>;
}

/// Text renderer: one glyph per cell, one line per row, flushed per frame.
///
/// Frames are appended; nothing is cleared between them.
pub struct TextRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,
}

impl TextRenderer<Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    /// Renderer writing to `out` with the default glyphs.
    pub fn new(out: W) -> Self {
        Self::with_glyphs(out, Glyphs::default())
    }

    /// Renderer writing to `out` with custom glyphs.
    pub fn with_glyphs(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        grid.render_with(&mut self.out, self.glyphs)?;
        self.out.flush()
    }
}
