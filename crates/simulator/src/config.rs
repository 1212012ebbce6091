//! Configuration types for the simulator.

use raceday_engine::SpeedModel;
use raceday_simulation::DriverConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a simulator run.
///
/// Every field has a default, so a TOML file only needs the values it
/// overrides:
///
/// ```toml
/// seed = 42
/// frame_ms = 16.0
///
/// [driver]
/// max_ticks_per_frame = 10
///
/// [model]
/// min_speed = 5.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Seed for program generation (pool and schedule).
    pub seed: i64,

    /// Seed for live race randomness. `None` draws from OS entropy.
    pub live_seed: Option<u64>,

    /// Simulated time handed to the driver per frame (ms).
    pub frame_ms: f64,

    /// Driver pacing.
    pub driver: DriverConfig,

    /// Speed model.
    pub model: SpeedModel,

    /// Head-to-head trial settings.
    pub trials: TrialConfig,
}

impl SimulatorConfig {
    /// Create a configuration for a program seed.
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            live_seed: None,
            frame_ms: 1000.0 / 60.0,
            driver: DriverConfig::default(),
            model: SpeedModel::default(),
            trials: TrialConfig::default(),
        }
    }

    /// Load from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Set the program seed.
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// Make live randomness reproducible.
    pub fn with_live_seed(mut self, live_seed: u64) -> Self {
        self.live_seed = Some(live_seed);
        self
    }

    /// Set the frame duration.
    pub fn with_frame_ms(mut self, frame_ms: f64) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    /// Set the driver configuration.
    pub fn with_driver(mut self, driver: DriverConfig) -> Self {
        self.driver = driver;
        self
    }

    /// Set the speed model.
    pub fn with_model(mut self, model: SpeedModel) -> Self {
        self.model = model;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Settings for head-to-head trials between two equal-pace competitors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    /// Number of independent races.
    pub trials: usize,

    /// Race distance (m).
    pub distance: f64,

    /// Shared base pace (m/s).
    pub base_pace: f64,

    /// Condition of the stronger competitor.
    pub high_condition: u8,

    /// Condition of the weaker competitor.
    pub low_condition: u8,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: 500,
            distance: 1000.0,
            base_pace: 15.0,
            high_condition: 95,
            low_condition: 20,
        }
    }
}

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = SimulatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SimulatorConfig::from_toml_str(
            r#"
            seed = 7
            live_seed = 99

            [driver]
            max_ticks_per_frame = 10

            [model]
            min_speed = 5.0

            [trials]
            trials = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.live_seed, Some(99));
        assert_eq!(config.driver.max_ticks_per_frame, 10);
        assert_eq!(config.driver.step_ms, DriverConfig::default().step_ms);
        assert_eq!(config.model.min_speed, 5.0);
        assert_eq!(config.model.pulse_min, SpeedModel::default().pulse_min);
        assert_eq!(config.trials.trials, 20);
        assert_eq!(config.trials.high_condition, 95);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = SimulatorConfig::new(3).with_live_seed(4).with_frame_ms(20.0);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SimulatorConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_toml_is_reported() {
        let err = SimulatorConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulatorConfig::from_toml_file("/nonexistent/raceday.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
