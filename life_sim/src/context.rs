//! Virtual-clock ticker for deterministic loop tests.

use async_trait::async_trait;
use life_env::{EnvError, Ticker};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Ticker backed by a virtual clock.
///
/// Every `tick` advances the clock by exactly one period and returns at once,
/// so a loop can be stepped through many generations without real waiting.
/// Clones share the same clock, which lets a test keep a handle after moving
/// the ticker into a simulation.
#[derive(Debug, Clone)]
pub struct SimTicker {
    /// Time between ticks
    period: Duration,

    /// Number of ticks completed (shared between clones)
    ticks: Arc<AtomicU64>,
}

impl SimTicker {
    /// Creates a virtual ticker with the given period.
    pub fn new(period: Duration) -> Result<Self, EnvError> {
        Ok(Self {
            period: EnvError::check_period(period)?,
            ticks: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Number of ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Ticker for SimTicker {
    async fn tick(&mut self) {
        self.ticks.fetch_add(1, Ordering::SeqCst);
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn elapsed(&self) -> Duration {
        u32::try_from(self.ticks()).map_or(Duration::MAX, |n| self.period.saturating_mul(n))
    }
}
