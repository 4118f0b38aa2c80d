//! Life Core - bounded Game of Life engine
//!
//! This library holds everything with invariants worth testing:
//! 1. **Grid**: fixed-size, non-wrapping field of live/dead cells
//! 2. **Seeding**: validated placement of rectangular pattern stencils
//! 3. **Transition**: Moore-neighborhood counting and the generation step
//!
//! Generations are immutable snapshots: `TransitionEngine::advance` reads one
//! grid and returns a new one, never touching its input.
//!
//! # Example
//!
//! ```
//! use life_core::{Grid, Pattern, Rule, TransitionEngine};
//!
//! let blinker = Pattern::from_static(&[&[true, true, true]]);
//! let grid = Grid::new(5, 5)?.with_pattern(&blinker, 1, 2)?;
//!
//! let engine = TransitionEngine::new(Rule::Conway);
//! let next = engine.advance(&grid)?;
//! assert_eq!(next.population(), 3);
//! # Ok::<(), life_core::LifeError>(())
//! ```

pub mod error;
pub mod grid;
pub mod pattern;
pub mod transition;

// Re-export key types for convenience
pub use error::{Dimension, LifeError, ShapeFault};
pub use grid::{Glyphs, Grid};
pub use pattern::Pattern;
pub use transition::{count_live_neighbors, Rule, TransitionEngine};
