//! Error types for the simulation engine.

use raceday_types::{CompetitorId, RoundId};
use thiserror::Error;

/// Errors raised by pool, schedule and round operations.
///
/// Nothing is retried internally; recovery is the caller's decision.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Asked to sample more items than the population holds.
    #[error("Cannot sample {requested} items from a population of {available}")]
    SampleTooLarge { requested: usize, available: usize },

    /// Pool size exceeds the curated name list.
    #[error("Requested {requested} competitors but only {available} names are available")]
    NotEnoughNames { requested: usize, available: usize },

    /// Pool size exceeds the curated color list.
    #[error("Requested {requested} competitors but only {available} colors are available")]
    NotEnoughColors { requested: usize, available: usize },

    /// Pool cannot fill a round.
    #[error("Pool of {pool} competitors cannot fill rounds of {required}")]
    PoolTooSmall { pool: usize, required: usize },

    /// Speed model parameters would stall or break the simulation.
    #[error("Invalid speed model: {0}")]
    InvalidModel(String),

    /// A referenced competitor is absent from the lookup.
    #[error("Competitor {0} is missing from the lookup")]
    MissingCompetitor(CompetitorId),

    /// A round did not finish within the safety ceiling.
    #[error("{round} did not complete within {ceiling_ms}ms (elapsed {elapsed_ms}ms)")]
    SimulationTimeout {
        round: RoundId,
        elapsed_ms: f64,
        ceiling_ms: f64,
    },
}

impl SimError {
    /// Whether this error indicates a caller bug or misconfiguration rather
    /// than a bad argument.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SimError::MissingCompetitor(_) | SimError::SimulationTimeout { .. }
        )
    }
}
