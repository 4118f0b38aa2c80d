//! Production implementation of Ticker using Tokio.

use crate::{EnvError, Ticker};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Wall-clock ticker backed by `tokio::time::Interval`.
///
/// The first tick fires one full period after creation. When a frame overruns
/// the period, the late tick fires immediately and later ticks stay on the
/// initial schedule instead of bursting to catch up.
pub struct TokioTicker {
    /// Start time for elapsed calculations
    start: Instant,

    /// Underlying periodic timer
    interval: Interval,
}

impl TokioTicker {
    /// Creates a ticker with the given period.
    ///
    /// Must be called from within a Tokio runtime with the time driver enabled.
    pub fn new(period: Duration) -> Result<Self, EnvError> {
        let period = EnvError::check_period(period)?;
        let start = Instant::now();

        let mut interval = time::interval_at(start + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(Self { start, interval })
    }
}

#[async_trait]
impl Ticker for TokioTicker {
    async fn tick(&mut self) {
        self.interval.tick().await;
    }

    fn period(&self) -> Duration {
        self.interval.period()
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
