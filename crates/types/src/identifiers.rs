//! Domain-specific identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Competitor identifier.
///
/// Assigned from the competitor's 1-based position in the generated pool, so
/// the same seed always yields the same ids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompetitorId(pub u32);

impl CompetitorId {
    /// Id for the competitor at the given 0-based pool position.
    pub fn from_position(position: usize) -> Self {
        CompetitorId(position as u32 + 1)
    }
}

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{:02}", self.0)
    }
}

/// Round ordinal (1-based).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoundId(pub u32);

impl RoundId {
    /// The first round of a program.
    pub const FIRST: Self = RoundId(1);

    /// Get the next round ordinal.
    pub fn next(self) -> Self {
        RoundId(self.0 + 1)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Lane number within a round (1-based).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Lane(pub u32);

impl Lane {
    /// Lane for the entrant at the given 0-based position in a round's list.
    pub fn from_position(position: usize) -> Self {
        Lane(position as u32 + 1)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lane {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitor_id_display() {
        assert_eq!(CompetitorId::from_position(0).to_string(), "C01");
        assert_eq!(CompetitorId(12).to_string(), "C12");
    }

    #[test]
    fn test_round_id_next() {
        assert_eq!(RoundId::FIRST.next(), RoundId(2));
    }

    #[test]
    fn test_lane_from_position() {
        assert_eq!(Lane::from_position(0), Lane(1));
        assert_eq!(Lane::from_position(7), Lane(8));
    }
}
