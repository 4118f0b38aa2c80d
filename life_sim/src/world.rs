//! LifeWorld - the grid being simulated and the engine that advances it.

use crate::error::SimError;
use crate::patterns::PatternRegistry;

use life_core::{Grid, Pattern, Rule, TransitionEngine};
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Grid width in cells
    pub cols: usize,

    /// Grid height in cells
    pub rows: usize,

    /// Top-left corner `(x, y)` where the seed pattern is placed
    pub seed_offset: (usize, usize),

    /// Wall-clock time between generations
    pub tick_period: Duration,

    /// Transition rule
    pub rule: Rule,

    /// Stop after this many generations (None = run until killed)
    pub max_generations: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cols: 40,
            rows: 25,
            seed_offset: (10, 10),
            tick_period: Duration::from_secs(1),
            rule: Rule::TwoOrThree,
            max_generations: None,
        }
    }
}

impl SimConfig {
    /// Sets the grid shape.
    pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Sets the seed placement offset.
    pub fn with_seed_offset(mut self, x: usize, y: usize) -> Self {
        self.seed_offset = (x, y);
        self
    }

    /// Sets the tick period.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Sets the transition rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Bounds the number of generations.
    pub fn with_max_generations(mut self, generations: u64) -> Self {
        self.max_generations = Some(generations);
        self
    }
}

/// The current generation plus what is needed to produce the next one.
///
/// Holds exactly one grid; each `tick` replaces it with a freshly computed
/// successor.
#[derive(Debug)]
pub struct LifeWorld {
    /// Configuration
    config: SimConfig,

    /// Transition engine for `config.rule`
    engine: TransitionEngine,

    /// Current generation
    grid: Grid,

    /// Generations computed so far
    generation: u64,
}

impl LifeWorld {
    /// Creates an all-dead world of the configured size.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let grid = Grid::new(config.cols, config.rows)?;
        let engine = TransitionEngine::new(config.rule);

        Ok(Self {
            config,
            engine,
            grid,
            generation: 0,
        })
    }

    /// Creates a world seeded with the pattern registered as `pattern_name`.
    ///
    /// The name is resolved before the grid is built, so an unknown name is
    /// reported even when the configured size is also bad.
    pub fn seeded(
        config: SimConfig,
        registry: &PatternRegistry,
        pattern_name: &str,
    ) -> Result<Self, SimError> {
        let pattern = registry.resolve(pattern_name)?;
        let mut world = Self::new(config)?;
        world.seed(pattern)?;

        info!(
            "Seeded '{}' at {:?} on a {}x{} grid (rule: {})",
            pattern_name,
            world.config.seed_offset,
            world.config.cols,
            world.config.rows,
            world.config.rule,
        );
        Ok(world)
    }

    /// Places `pattern` at the configured offset.
    pub fn seed(&mut self, pattern: &Pattern) -> Result<(), SimError> {
        let (x, y) = self.config.seed_offset;
        self.grid.place(pattern, x, y)?;
        Ok(())
    }

    /// Advances one generation.
    ///
    /// On error the current grid is kept as is; no partial generation is
    /// ever installed.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let next = self.engine.advance(&self.grid)?;
        self.grid = next;
        self.generation += 1;

        debug!(
            "generation={} population={}",
            self.generation,
            self.grid.population()
        );
        Ok(())
    }

    /// Current generation's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations computed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Configuration in use.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
