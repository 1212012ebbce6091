//! Cumulative standings.
//!
//! The leaderboard is never stored: every call folds the full result history
//! from scratch, so it cannot drift from the results it summarizes.

use raceday_types::{Competitor, CompetitorId, LeaderboardRow, RoundResult};
use std::collections::HashMap;

/// Points awarded for a finishing position.
pub fn points_for_position(position: u32) -> u32 {
    match position {
        1 => 5,
        2 => 3,
        3 => 2,
        _ => 1,
    }
}

#[derive(Default)]
struct Tally {
    rounds: u32,
    wins: u32,
    podiums: u32,
    points: u32,
    total_time_ms: f64,
}

/// Standings for every competitor in `pool`, best first.
///
/// Sorted by points (desc), average time (asc), condition (desc), then id.
/// Competitors without rounds appear with zeroed rows.
///
/// `results` is any iteration over the history, so callers holding a `Vec`,
/// a slice or a persistent vector can pass it without copying.
pub fn compute_leaderboard<'a, I>(pool: &[Competitor], results: I) -> Vec<LeaderboardRow>
where
    I: IntoIterator<Item = &'a RoundResult>,
{
    let mut tallies: HashMap<CompetitorId, Tally> = HashMap::new();

    for placement in results.into_iter().flat_map(|r| &r.placements) {
        let tally = tallies.entry(placement.competitor_id).or_default();
        tally.rounds += 1;
        tally.points += points_for_position(placement.position);
        tally.total_time_ms += placement.finish_time_ms;
        if placement.is_win() {
            tally.wins += 1;
        }
        if placement.is_podium() {
            tally.podiums += 1;
        }
    }

    let mut rows: Vec<LeaderboardRow> = pool
        .iter()
        .map(|competitor| {
            let tally = tallies.remove(&competitor.id).unwrap_or_default();
            let average_time_ms = if tally.rounds > 0 {
                tally.total_time_ms / f64::from(tally.rounds)
            } else {
                0.0
            };

            LeaderboardRow {
                competitor_id: competitor.id,
                name: competitor.name.clone(),
                color: competitor.color.clone(),
                condition: competitor.condition,
                rounds: tally.rounds,
                wins: tally.wins,
                podiums: tally.podiums,
                points: tally.points,
                total_time_ms: tally.total_time_ms,
                average_time_ms,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.average_time_ms.total_cmp(&b.average_time_ms))
            .then_with(|| b.condition.cmp(&a.condition))
            .then_with(|| a.competitor_id.cmp(&b.competitor_id))
    });
    rows
}
