//! Errors surfaced by the simulator to the process boundary.

use life_core::LifeError;
use life_env::EnvError;
use std::io;
use thiserror::Error;

/// Every failure is fatal to a run; there is no recovery path.
#[derive(Debug, Error)]
pub enum SimError {
    /// No pattern is registered under this name
    #[error("pattern '{0}' isn't supported")]
    UnsupportedPattern(String),

    /// Grid construction, seeding or transition failed
    #[error(transparent)]
    Life(#[from] LifeError),

    /// Tick source could not be created
    #[error(transparent)]
    Env(#[from] EnvError),

    /// Writing a frame failed
    #[error("Render error: {0}")]
    Render(#[from] io::Error),
}

impl SimError {
    /// Creates an unsupported-pattern error.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedPattern(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::Dimension;

    #[test]
    fn test_unsupported_pattern_message() {
        assert_eq!(
            SimError::unsupported("spaceship").to_string(),
            "pattern 'spaceship' isn't supported"
        );
    }

    #[test]
    fn test_life_error_is_transparent() {
        let err: SimError = LifeError::InvalidDimension(Dimension::Cols).into();
        assert_eq!(
            err.to_string(),
            "Invalid dimension: column count must be greater than 0"
        );
    }
}
