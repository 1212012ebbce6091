//! Metrics collection for simulator runs.

use hdrhistogram::{CreationError, Histogram};
use raceday_types::RoundResult;
use serde::Serialize;
use std::fmt;

/// Highest finish time the histogram tracks (1 hour, in ms).
const MAX_TRACKED_MS: u64 = 60 * 60 * 1000;

/// Collects per-round metrics as results arrive.
pub struct MetricsCollector {
    /// Finish times of every placement (ms).
    finish_times: Histogram<u64>,

    /// Winning times per round (ms).
    winning_times: Histogram<u64>,

    rounds: usize,
    best_speed: f64,
}

impl MetricsCollector {
    pub fn new() -> Result<Self, CreationError> {
        Ok(Self {
            finish_times: Histogram::new_with_bounds(1, MAX_TRACKED_MS, 3)?,
            winning_times: Histogram::new_with_bounds(1, MAX_TRACKED_MS, 3)?,
            rounds: 0,
            best_speed: 0.0,
        })
    }

    /// Record a finished round.
    pub fn record_result(&mut self, result: &RoundResult) {
        self.rounds += 1;
        for placement in &result.placements {
            self.finish_times
                .saturating_record(placement.finish_time_ms.round().max(1.0) as u64);
            self.best_speed = self.best_speed.max(placement.best_speed);
        }
        if let Some(winner) = result.winner() {
            self.winning_times
                .saturating_record(winner.finish_time_ms.round().max(1.0) as u64);
        }
    }

    /// Summarize everything recorded so far.
    pub fn report(&self, total_ticks: u64) -> SimulationReport {
        let quantile = |h: &Histogram<u64>, q: f64| {
            if h.is_empty() {
                0
            } else {
                h.value_at_quantile(q)
            }
        };

        SimulationReport {
            rounds: self.rounds,
            placements: self.finish_times.len(),
            total_ticks,
            finish_p50_ms: quantile(&self.finish_times, 0.5),
            finish_p90_ms: quantile(&self.finish_times, 0.9),
            finish_p99_ms: quantile(&self.finish_times, 0.99),
            finish_max_ms: self.finish_times.max(),
            winning_mean_ms: if self.winning_times.is_empty() {
                0.0
            } else {
                self.winning_times.mean()
            },
            best_speed: self.best_speed,
        }
    }
}

/// Summary of a simulator run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub rounds: usize,
    pub placements: u64,
    pub total_ticks: u64,
    pub finish_p50_ms: u64,
    pub finish_p90_ms: u64,
    pub finish_p99_ms: u64,
    pub finish_max_ms: u64,
    pub winning_mean_ms: f64,
    pub best_speed: f64,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rounds: {}  Placements: {}  Ticks: {}",
            self.rounds, self.placements, self.total_ticks
        )?;
        writeln!(
            f,
            "Finish times: p50 {:.1}s  p90 {:.1}s  p99 {:.1}s  max {:.1}s",
            self.finish_p50_ms as f64 / 1000.0,
            self.finish_p90_ms as f64 / 1000.0,
            self.finish_p99_ms as f64 / 1000.0,
            self.finish_max_ms as f64 / 1000.0,
        )?;
        write!(
            f,
            "Mean winning time: {:.2}s  Best speed: {:.2} m/s",
            self.winning_mean_ms / 1000.0,
            self.best_speed
        )
    }
}
