//! Life Simulator - terminal Game of Life
//!
//! Seeds a bounded grid with a named pattern and then, once per tick,
//! renders the current generation and replaces it with the next.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SimulationLoop                         │
//! │                                                             │
//! │   render ──────────► advance ──────────► wait               │
//! │     │                   │                  │                │
//! │  ┌──▼───────┐     ┌─────▼──────┐     ┌─────▼──────┐         │
//! │  │ Renderer │     │ LifeWorld  │     │   Ticker   │         │
//! │  │ (stdout) │     │ grid+engine│     │ (1s period)│         │
//! │  └──────────┘     └─────▲──────┘     └────────────┘         │
//! │                         │ seeded once                       │
//! │                  ┌──────┴──────────┐                        │
//! │                  │ PatternRegistry │                        │
//! │                  └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use life_sim::{LifeWorld, PatternRegistry, SimConfig, SimulationLoop, TextRenderer};
//! use life_env::TokioTicker;
//!
//! let config = SimConfig::default();
//! let world = LifeWorld::seeded(config.clone(), &PatternRegistry::builtin(), "glider")?;
//! let ticker = TokioTicker::new(config.tick_period)?;
//!
//! SimulationLoop::new(world, TextRenderer::stdout(), ticker).run().await?;
//! ```

mod context;
mod error;
mod render;
mod runner;
mod world;
pub mod patterns;

pub use context::SimTicker;
pub use error::SimError;
pub use patterns::{PatternRegistry, DEFAULT_PATTERN};
pub use render::{Renderer, TextRenderer};
pub use runner::{LoopState, SimulationLoop};
pub use world::{LifeWorld, SimConfig};
