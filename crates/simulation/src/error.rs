//! Driver errors.

use raceday_core::SimError;
use raceday_types::RoundId;
use thiserror::Error;

/// Errors raised by [`ProgramRunner`](crate::ProgramRunner).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DriverError {
    /// The engine rejected an operation.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Pacing configuration is unusable.
    #[error("Invalid driver config: {0}")]
    InvalidConfig(String),

    /// A round is already running.
    #[error("{0} is still in progress")]
    RoundInProgress(RoundId),

    /// No round has been started, or the last one already finished.
    #[error("No round is running")]
    NoActiveRound,

    /// Every scheduled round has been run.
    #[error("All rounds have been run")]
    ProgramFinished,
}
