//! The wait half of a simulation tick.

use async_trait::async_trait;
use std::time::Duration;

/// A fixed-period tick source the simulation loop waits on between frames.
///
/// # Implementations
///
/// - **Production**: `TokioTicker` - wraps `tokio::time::Interval`
/// - **Simulation**: `SimTicker` (in `life_sim`) - virtual clock, returns immediately
///
/// The period is measured boundary to boundary, so the time spent rendering
/// and computing a generation does not stretch the cadence: a tick that is
/// already due completes at once.
#[async_trait]
pub trait Ticker: Send {
    /// Completes at the next tick boundary.
    async fn tick(&mut self);

    /// Nominal time between ticks.
    fn period(&self) -> Duration;

    /// Time since the ticker was created.
    ///
    /// In simulation, this is virtual clock time.
    fn elapsed(&self) -> Duration;
}
