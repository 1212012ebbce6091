//! Simulator runner: drives a whole program frame by frame.

use crate::config::SimulatorConfig;
use crate::metrics::{MetricsCollector, SimulationReport};
use hdrhistogram::CreationError;
use raceday_core::{EntropyRng, SimError};
use raceday_engine::Program;
use raceday_simulation::{DriverError, ProgramRunner};
use raceday_types::{LeaderboardRow, RoundResult};
use serde::Serialize;
use tracing::{debug, info};

/// Errors from a simulator run.
#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("Could not create metrics histogram: {0}")]
    Metrics(#[from] CreationError),

    #[error("Frame duration must be positive and finite, got {0}")]
    InvalidFrame(f64),
}

/// Everything a finished run produced.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationRun {
    pub program: Program,
    pub results: Vec<RoundResult>,
    pub leaderboard: Vec<LeaderboardRow>,
    pub report: SimulationReport,
}

/// Runs a generated program to the end.
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Generate the program and run every round in fixed-size frames.
    pub fn run(&self) -> Result<SimulationRun, SimulatorError> {
        let frame_ms = self.config.frame_ms;
        if !frame_ms.is_finite() || frame_ms <= 0.0 {
            return Err(SimulatorError::InvalidFrame(frame_ms));
        }

        let program = Program::generate(self.config.seed)?;
        let rng = match self.config.live_seed {
            Some(seed) => EntropyRng::seeded(seed),
            None => EntropyRng::from_entropy(),
        };
        info!(
            seed = self.config.seed,
            live_seed = ?self.config.live_seed,
            rounds = program.rounds.len(),
            "Starting simulation"
        );

        let mut runner = ProgramRunner::new(
            program,
            rng,
            self.config.model.clone(),
            self.config.driver.clone(),
        )?;
        let mut metrics = MetricsCollector::new()?;

        while !runner.is_finished() {
            let round = runner.start_next_round()?.round_id;
            let mut frames = 0u64;
            let result = loop {
                frames += 1;
                if let Some(result) = runner.advance_frame(frame_ms)? {
                    break result;
                }
            };
            debug!(round = %round, frames, "Round driven to completion");
            metrics.record_result(&result);
        }

        let report = metrics.report(runner.stats().total_ticks);
        info!(
            rounds = report.rounds,
            ticks = report.total_ticks,
            "Simulation finished"
        );

        Ok(SimulationRun {
            program: runner.program().clone(),
            results: runner.history().into_iter().collect(),
            leaderboard: runner.leaderboard(),
            report,
        })
    }
}
