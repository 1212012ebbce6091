//! Engine constants and the tunable speed model.

use raceday_core::SimError;
use serde::{Deserialize, Serialize};

/// Competitors generated per program.
pub const POOL_SIZE: usize = 20;

/// Entrants drawn into every round.
pub const ENTRANTS_PER_ROUND: usize = 8;

/// Round distances in metres, in running order. Its length is the round count.
pub const ROUND_DISTANCES: [f64; 7] = [1000.0, 1200.0, 1400.0, 1600.0, 1800.0, 2000.0, 2400.0];

/// Lowest base pace a competitor can have (m/s).
pub const PACE_FLOOR: f64 = 14.0;

/// Base pace added per condition point (m/s).
pub const PACE_CONDITION_SCALE: f64 = 0.025;

/// Upper bound of the random base pace term (m/s).
pub const PACE_RANDOM_SPREAD: f64 = 1.5;

/// Per-tick speed model.
///
/// ```text
/// speed = max(pace · condition · pulse · fatigue · kick, min_speed)
/// ```
///
/// Defaults give a pulse with mean 1.01, at most 12% fatigue, and a finishing
/// kick over the last 15% of the distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedModel {
    /// Condition multiplier at condition 0.
    pub condition_base: f64,

    /// Extra multiplier at condition 100.
    pub condition_range: f64,

    /// Lower bound of the per-tick random pulse.
    pub pulse_min: f64,

    /// Width of the per-tick random pulse.
    pub pulse_spread: f64,

    /// Fraction of speed lost per unit of progress.
    pub fatigue_rate: f64,

    /// Maximum fraction of speed fatigue can remove.
    pub fatigue_cap: f64,

    /// Progress ratio after which the finishing kick applies.
    pub kick_threshold: f64,

    /// Lower bound of the kick multiplier.
    pub kick_base: f64,

    /// Width of the kick multiplier.
    pub kick_spread: f64,

    /// Speed floor (m/s). Must be positive.
    pub min_speed: f64,

    /// Tick size used when running a round to completion (ms).
    pub step_ms: f64,

    /// Simulated time after which a round is considered stalled (ms).
    pub safety_ceiling_ms: f64,
}

impl Default for SpeedModel {
    fn default() -> Self {
        Self {
            condition_base: 0.85,
            condition_range: 0.30,
            pulse_min: 0.94,
            pulse_spread: 0.14,
            fatigue_rate: 0.15,
            fatigue_cap: 0.12,
            kick_threshold: 0.85,
            kick_base: 1.03,
            kick_spread: 0.05,
            min_speed: 4.0,
            step_ms: 50.0,
            safety_ceiling_ms: 30.0 * 60.0 * 1000.0,
        }
    }
}

impl SpeedModel {
    /// A model with no randomness, fatigue or kick. Speed is constant for a
    /// given competitor, which makes crossing times analytic.
    pub fn steady() -> Self {
        Self {
            pulse_min: 1.0,
            pulse_spread: 0.0,
            fatigue_rate: 0.0,
            fatigue_cap: 0.0,
            kick_base: 1.0,
            kick_spread: 0.0,
            ..Default::default()
        }
    }

    /// Set the speed floor.
    pub fn with_min_speed(mut self, min_speed: f64) -> Self {
        self.min_speed = min_speed;
        self
    }

    /// Set the tick size used by `run_to_completion`.
    pub fn with_step_ms(mut self, step_ms: f64) -> Self {
        self.step_ms = step_ms;
        self
    }

    /// Set the safety ceiling.
    pub fn with_safety_ceiling_ms(mut self, ceiling_ms: f64) -> Self {
        self.safety_ceiling_ms = ceiling_ms;
        self
    }

    /// Set the pulse bounds.
    pub fn with_pulse(mut self, min: f64, spread: f64) -> Self {
        self.pulse_min = min;
        self.pulse_spread = spread;
        self
    }

    /// Condition multiplier for a condition score.
    pub fn condition_multiplier(&self, condition: u8) -> f64 {
        self.condition_base + f64::from(condition) / 100.0 * self.condition_range
    }

    /// Fatigue factor at a progress ratio.
    pub fn fatigue_factor(&self, ratio: f64) -> f64 {
        1.0 - (ratio * self.fatigue_rate).min(self.fatigue_cap)
    }

    /// Check the parameters cannot stall a round or divide by zero.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidModel(format!(
                    "{} must be positive, got {}",
                    name, value
                )))
            }
        };

        positive("min_speed", self.min_speed)?;
        positive("step_ms", self.step_ms)?;
        positive("safety_ceiling_ms", self.safety_ceiling_ms)?;
        positive("condition_base", self.condition_base)?;
        positive("pulse_min", self.pulse_min)?;

        if self.condition_range < 0.0 || self.pulse_spread < 0.0 || self.kick_spread < 0.0 {
            return Err(SimError::InvalidModel(
                "ranges and spreads must not be negative".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.fatigue_cap) || self.fatigue_rate < 0.0 {
            return Err(SimError::InvalidModel(format!(
                "fatigue_cap must be in [0, 1), got {}",
                self.fatigue_cap
            )));
        }
        if self.kick_base < 1.0 {
            return Err(SimError::InvalidModel(format!(
                "kick_base must be at least 1, got {}",
                self.kick_base
            )));
        }
        Ok(())
    }
}
