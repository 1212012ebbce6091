//! Driver pacing configuration.

use crate::DriverError;
use serde::{Deserialize, Serialize};

/// How the driver turns frame time into engine ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Fixed tick size in simulated milliseconds.
    pub step_ms: f64,

    /// Most ticks a single frame may run. Frame time beyond this budget is
    /// dropped rather than carried over.
    pub max_ticks_per_frame: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            step_ms: 50.0,
            max_ticks_per_frame: 40,
        }
    }
}

impl DriverConfig {
    /// Set the tick size.
    pub fn with_step_ms(mut self, step_ms: f64) -> Self {
        self.step_ms = step_ms;
        self
    }

    /// Set the per-frame tick budget.
    pub fn with_max_ticks_per_frame(mut self, max_ticks: u32) -> Self {
        self.max_ticks_per_frame = max_ticks;
        self
    }

    /// Reject configurations that could never make progress.
    pub fn validate(&self) -> Result<(), DriverError> {
        if !self.step_ms.is_finite() || self.step_ms <= 0.0 {
            return Err(DriverError::InvalidConfig(format!(
                "step_ms must be positive, got {}",
                self.step_ms
            )));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(DriverError::InvalidConfig(
                "max_ticks_per_frame must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
