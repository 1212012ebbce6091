//! Competitor types.

use crate::CompetitorId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lowest condition score a competitor can be generated with.
pub const CONDITION_MIN: u8 = 1;

/// Highest condition score a competitor can be generated with.
pub const CONDITION_MAX: u8 = 100;

/// A competitor in the pool.
///
/// Immutable once generated; owned by the program for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// Stable identifier derived from pool position.
    pub id: CompetitorId,

    /// Display name, unique within the pool.
    pub name: String,

    /// Display color (`#rrggbb`), unique within the pool.
    pub color: String,

    /// Static skill attribute in `[CONDITION_MIN, CONDITION_MAX]`.
    pub condition: u8,

    /// Base pace in metres per second.
    pub base_pace: f64,
}

/// Competitors keyed by id, in pool order.
pub type CompetitorLookup = IndexMap<CompetitorId, Competitor>;

/// Build a lookup from a generated pool.
pub fn lookup_from_pool(pool: &[Competitor]) -> CompetitorLookup {
    pool.iter().map(|c| (c.id, c.clone())).collect()
}
