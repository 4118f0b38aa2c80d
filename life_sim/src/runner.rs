//! Simulation loop - render, advance, wait, forever.

use crate::error::SimError;
use crate::render::Renderer;
use crate::world::LifeWorld;

use life_env::Ticker;
use tracing::{error, info};

/// Lifecycle of a simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Rendering and advancing generations
    Running,

    /// Halted by an error; nothing more will be rendered or computed
    Terminated,
}

/// Drives a [`LifeWorld`] at a fixed cadence.
///
/// Each tick renders the current generation, computes the next one and then
/// waits for the ticker. The loop has no natural end: `run` only returns on
/// an error, or when the world's config bounds the number of generations.
pub struct SimulationLoop<R, T>
where
    R: Renderer,
    T: Ticker,
{
    /// Current generation and engine
    world: LifeWorld,

    /// Frame output
    renderer: R,

    /// Tick source
    ticker: T,

    /// Running or terminated
    state: LoopState,
}

impl<R, T> SimulationLoop<R, T>
where
    R: Renderer,
    T: Ticker,
{
    /// Creates a running loop over an already seeded world.
    pub fn new(world: LifeWorld, renderer: R, ticker: T) -> Self {
        Self {
            world,
            renderer,
            ticker,
            state: LoopState::Running,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The world being simulated.
    pub fn world(&self) -> &LifeWorld {
        &self.world
    }

    /// The tick source.
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Consumes the loop and returns the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Renders the current generation and advances to the next.
    ///
    /// Returns `Ok(false)` without doing anything once terminated. Any
    /// failure terminates the loop and is returned.
    pub fn step(&mut self) -> Result<bool, SimError> {
        if self.state == LoopState::Terminated {
            return Ok(false);
        }

        let result = self
            .renderer
            .render(self.world.grid())
            .map_err(SimError::from)
            .and_then(|()| self.world.tick());

        match result {
            Ok(()) => Ok(true),
            Err(e) => {
                error!(
                    "Simulation terminated at generation {}: {}",
                    self.world.generation(),
                    e
                );
                self.state = LoopState::Terminated;
                Err(e)
            }
        }
    }

    /// Runs until an error, or until `max_generations` is reached.
    ///
    /// Returns the number of generations computed.
    pub async fn run(&mut self) -> Result<u64, SimError> {
        info!(
            "Starting simulation: one generation every {:?}",
            self.ticker.period()
        );

        while self.state == LoopState::Running {
            if let Some(max) = self.world.config().max_generations {
                if self.world.generation() >= max {
                    info!("Reached {} generations", max);
                    break;
                }
            }

            self.step()?;
            self.ticker.tick().await;
        }

        Ok(self.world.generation())
    }
}
