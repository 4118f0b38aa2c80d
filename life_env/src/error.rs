//! Error types for the tick source layer.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while setting up a tick source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A periodic timer needs a non-zero period
    #[error("Invalid tick period: {0:?} (must be greater than zero)")]
    InvalidPeriod(Duration),
}

impl EnvError {
    /// Checks that `period` can drive a periodic timer.
    pub fn check_period(period: Duration) -> Result<Duration, Self> {
        if period.is_zero() {
            Err(Self::InvalidPeriod(period))
        } else {
            Ok(period)
        }
    }
}
