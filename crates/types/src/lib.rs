//! Core domain types for the Raceday simulator.
//!
//! Plain data only: competitors, round definitions, per-round simulation
//! state, results and leaderboard rows. The engine crate owns every
//! operation over them.

mod competitor;
mod identifiers;
mod result;
mod round;

pub use competitor::{lookup_from_pool, Competitor, CompetitorLookup, CONDITION_MAX, CONDITION_MIN};
pub use identifiers::{CompetitorId, Lane, RoundId};
pub use result::{LeaderboardRow, Placement, RoundResult};
pub use round::{RoundDefinition, RoundEntry, RoundPhase, RoundState, RoundStatus};
