//! Life Environment Abstraction Layer
//!
//! The simulation loop renders, advances and then waits for the next tick.
//! This crate abstracts that wait so the same loop runs against the wall
//! clock in production and against a virtual clock in tests.
//!
//! # Example
//!
//! ```ignore
//! use life_env::{Ticker, TokioTicker};
//!
//! let mut ticker = TokioTicker::new(Duration::from_secs(1))?;
//! loop {
//!     render(&grid);
//!     grid = engine.advance(&grid)?;
//!     ticker.tick().await;
//! }
//! ```

mod error;
mod ticker;
mod tokio_impl;

pub use error::EnvError;
pub use ticker::Ticker;
pub use tokio_impl::TokioTicker;
