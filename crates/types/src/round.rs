//! Round definition and per-round simulation state.

use crate::{CompetitorId, Lane, RoundId};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a scheduled round.
///
/// Only the driver moves a definition through these states; the engine never
/// touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    NotStarted,
    Running,
    Complete,
}

/// A scheduled round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundDefinition {
    /// Round ordinal.
    pub id: RoundId,

    /// Target distance in metres.
    pub distance: f64,

    /// Entrants in lane order. Fixed size, no duplicates.
    pub competitor_ids: Vec<CompetitorId>,

    /// Lifecycle status, maintained by the driver.
    pub status: RoundStatus,
}

/// Phase of a round simulation, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    NotStarted,
    Running,
    Complete,
}

/// One competitor's mutable record for a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEntry {
    pub competitor_id: CompetitorId,

    /// Lane, from the competitor's position in the definition.
    pub lane: Lane,

    /// Metres covered, clamped to the round distance.
    pub distance_covered: f64,

    /// `distance_covered / distance`, in `[0, 1]`.
    pub progress: f64,

    /// Speed computed on the most recent tick (m/s).
    pub last_speed: f64,

    /// Highest speed observed so far (m/s). Never decreases.
    pub best_speed: f64,

    /// Interpolated crossing time in milliseconds, once finished.
    pub finish_time_ms: Option<f64>,
}

impl RoundEntry {
    /// A fresh entry at the start line.
    pub fn new(competitor_id: CompetitorId, lane: Lane) -> Self {
        Self {
            competitor_id,
            lane,
            distance_covered: 0.0,
            progress: 0.0,
            last_speed: 0.0,
            best_speed: 0.0,
            finish_time_ms: None,
        }
    }

    /// Whether this entry has crossed the line.
    pub fn is_finished(&self) -> bool {
        self.finish_time_ms.is_some()
    }
}

/// Simulation state of the active round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub round_id: RoundId,

    /// Target distance in metres.
    pub distance: f64,

    /// Simulated time elapsed, in milliseconds.
    pub elapsed_ms: f64,

    /// One entry per entrant, in lane order.
    pub entries: Vec<RoundEntry>,

    /// Set once every entry has a finish time.
    pub complete: bool,
}

impl RoundState {
    /// Current phase of the round.
    pub fn phase(&self) -> RoundPhase {
        if self.complete {
            RoundPhase::Complete
        } else if self.elapsed_ms > 0.0 {
            RoundPhase::Running
        } else {
            RoundPhase::NotStarted
        }
    }

    /// Number of entries that have crossed the line.
    pub fn finished_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_finished()).count()
    }

    /// Look up an entry by competitor.
    pub fn entry(&self, competitor_id: CompetitorId) -> Option<&RoundEntry> {
        self.entries
            .iter()
            .find(|e| e.competitor_id == competitor_id)
    }
}
