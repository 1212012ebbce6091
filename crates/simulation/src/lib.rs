//! Headless program driver.
//!
//! Drives a generated program round by round the way an interactive front
//! end would, minus rendering and wall clocks: the caller hands in frame
//! durations and reads back state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    ProgramRunner                        │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  Program: pool + schedule (RoundDefinition status) │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │ start_next_round            │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  RoundState, stepped in fixed ticks per frame      │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │ complete                    │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │  history: im::Vector<RoundResult> → leaderboard    │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod runner;

pub use config::DriverConfig;
pub use error::DriverError;
pub use runner::{DriverStats, ProgramRunner};
