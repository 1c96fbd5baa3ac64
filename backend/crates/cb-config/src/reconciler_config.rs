use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Propagation delay constraints
pub const MIN_PROPAGATION_DELAY_MS: u64 = 0;
pub const MAX_PROPAGATION_DELAY_MS: u64 = 10_000;
pub const DEFAULT_PROPAGATION_DELAY_MS: u64 = 500;

/// Profile reconciliation settings.
///
/// The propagation delay is the fixed wait inserted before re-reading a
/// profile, giving signup triggers time to commit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    pub propagation_delay_ms: u64,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            propagation_delay_ms: DEFAULT_PROPAGATION_DELAY_MS,
        }
    }
}

impl ReconcilerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.propagation_delay_ms > MAX_PROPAGATION_DELAY_MS {
            return Err(ConfigError::reconciler(format!(
                "reconciler.propagation_delay_ms must be {}-{}, got {}",
                MIN_PROPAGATION_DELAY_MS, MAX_PROPAGATION_DELAY_MS, self.propagation_delay_ms
            )));
        }

        Ok(())
    }

    pub fn propagation_delay(&self) -> Duration {
        Duration::from_millis(self.propagation_delay_ms)
    }
}
