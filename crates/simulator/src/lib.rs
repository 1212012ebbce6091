//! Raceday Simulator
//!
//! Command-line front end built on top of `raceday-simulation`. Runs whole
//! programs frame by frame and reports what happened.
//!
//! # Architecture
//!
//! The simulator builds on `raceday-simulation` to provide:
//!
//! - **Configuration**: TOML-loadable seeds, frame pacing, driver and model settings
//! - **Program Runs**: Drive every scheduled round and collect results and standings
//! - **Metrics Collection**: Finish-time percentiles and winning-time averages
//! - **Head-to-head Trials**: Parallel batches measuring how condition shifts outcomes
//!
//! # Example
//!
//! ```ignore
//! use raceday_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new(42).with_live_seed(7);
//! let run = Simulator::new(config).run()?;
//!
//! println!("{}", run.report);
//! for row in &run.leaderboard {
//!     println!("{} {} pts", row.name, row.points);
//! }
//! ```

pub mod config;
pub mod metrics;
pub mod runner;
pub mod trials;

pub use config::{ConfigError, SimulatorConfig, TrialConfig};
pub use metrics::{MetricsCollector, SimulationReport};
pub use runner::{SimulationRun, Simulator, SimulatorError};
pub use trials::{run_head_to_head, TrialSummary};
