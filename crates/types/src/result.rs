//! Round results and leaderboard rows.

use crate::{CompetitorId, Lane, RoundId};
use serde::{Deserialize, Serialize};

/// One entrant's placing in a finished round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// 1-based finishing position.
    pub position: u32,
    pub competitor_id: CompetitorId,
    pub name: String,
    pub lane: Lane,

    /// Crossing time, or the round's elapsed time if the entrant never crossed.
    pub finish_time_ms: f64,

    /// Best speed observed during the round (m/s).
    pub best_speed: f64,

    /// Condition snapshot at the time the result was built.
    pub condition: u8,
}

impl Placement {
    /// Position 1.
    pub fn is_win(&self) -> bool {
        self.position == 1
    }

    /// Positions 1 through 3.
    pub fn is_podium(&self) -> bool {
        (1..=3).contains(&self.position)
    }
}

/// Ranked outcome of a round. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_id: RoundId,

    /// Round distance in metres.
    pub distance: f64,

    /// Simulated time at which the result was taken.
    pub finished_at_ms: f64,

    /// Placements in finishing order.
    pub placements: Vec<Placement>,
}

impl RoundResult {
    /// The winning placement, if the round had any entrants.
    pub fn winner(&self) -> Option<&Placement> {
        self.placements.first()
    }

    /// Placement of a given competitor.
    pub fn placement_of(&self, competitor_id: CompetitorId) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|p| p.competitor_id == competitor_id)
    }
}

/// Cumulative standings for one competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub competitor_id: CompetitorId,
    pub name: String,
    pub color: String,
    pub condition: u8,

    /// Rounds participated in.
    pub rounds: u32,
    pub wins: u32,
    pub podiums: u32,
    pub points: u32,

    /// Sum of finish times across all rounds (ms).
    pub total_time_ms: f64,

    /// `total_time_ms / rounds`, or 0 with no rounds.
    pub average_time_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(position: u32) -> Placement {
        Placement {
            position,
            competitor_id: CompetitorId(position),
            name: format!("Runner {}", position),
            lane: Lane(position),
            finish_time_ms: 60_000.0 + position as f64,
            best_speed: 17.5,
            condition: 60,
        }
    }

    #[test]
    fn test_podium_and_win() {
        assert!(placement(1).is_win());
        assert!(placement(3).is_podium());
        assert!(!placement(4).is_podium());
        assert!(!placement(2).is_win());
    }

    #[test]
    fn test_placement_lookup() {
        let result = RoundResult {
            round_id: RoundId(1),
            distance: 1000.0,
            finished_at_ms: 60_050.0,
            placements: vec![placement(1), placement(2)],
        };

        assert_eq!(result.winner().map(|p| p.competitor_id), Some(CompetitorId(1)));
        assert_eq!(result.placement_of(CompetitorId(2)).map(|p| p.position), Some(2));
        assert!(result.placement_of(CompetitorId(5)).is_none());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_value(placement(2)).unwrap();
        assert_eq!(json["competitor_id"], 2);
        assert_eq!(json["lane"], 2);
    }
}
