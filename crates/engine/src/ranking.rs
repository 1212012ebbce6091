//! Finishing order and result construction.

use raceday_core::SimError;
use raceday_types::{CompetitorLookup, Placement, RoundEntry, RoundResult, RoundState};
use std::cmp::Ordering;
use tracing::info;

/// Strict total order over entries.
///
/// 1. Earlier finish time first; unfinished entries sort after every finisher.
/// 2. Further distance covered first.
/// 3. Lower lane first.
///
/// Lanes are unique within a round, so two distinct entries never compare
/// equal.
pub fn compare_entries(a: &RoundEntry, b: &RoundEntry) -> Ordering {
    let finish = |e: &RoundEntry| e.finish_time_ms.unwrap_or(f64::INFINITY);

    finish(a)
        .total_cmp(&finish(b))
        .then_with(|| b.distance_covered.total_cmp(&a.distance_covered))
        .then_with(|| a.lane.cmp(&b.lane))
}

/// Entries of a round in finishing order.
pub fn rank_entries(state: &RoundState) -> Vec<&RoundEntry> {
    let mut ranked: Vec<&RoundEntry> = state.entries.iter().collect();
    ranked.sort_by(|a, b| compare_entries(a, b));
    ranked
}

/// Build the ranked result of a round.
///
/// Usually called on a complete round, but works mid-round: entrants still
/// running are ranked by distance and take the round's elapsed time as their
/// finish time.
pub fn build_result(
    state: &RoundState,
    lookup: &CompetitorLookup,
) -> Result<RoundResult, SimError> {
    let placements = rank_entries(state)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let competitor = lookup
                .get(&entry.competitor_id)
                .ok_or(SimError::MissingCompetitor(entry.competitor_id))?;

            Ok(Placement {
                position: index as u32 + 1,
                competitor_id: entry.competitor_id,
                name: competitor.name.clone(),
                lane: entry.lane,
                finish_time_ms: entry.finish_time_ms.unwrap_or(state.elapsed_ms),
                best_speed: entry.best_speed,
                condition: competitor.condition,
            })
        })
        .collect::<Result<Vec<_>, SimError>>()?;

    if let Some(winner) = placements.first() {
        info!(
            round = %state.round_id,
            winner = %winner.name,
            finish_time_ms = winner.finish_time_ms,
            complete = state.complete,
            "Round result"
        );
    }

    Ok(RoundResult {
        round_id: state.round_id,
        distance: state.distance,
        finished_at_ms: state.elapsed_ms,
        placements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use raceday_test_helpers::{lookup_of, uniform_pool};
    use raceday_types::{CompetitorId, Lane, RoundId};

    fn entry(id: u32, lane: u32, distance: f64, finish: Option<f64>) -> RoundEntry {
        RoundEntry {
            competitor_id: CompetitorId(id),
            lane: Lane(lane),
            distance_covered: distance,
            progress: distance / 1000.0,
            last_speed: 15.0,
            best_speed: 16.0 + id as f64,
            finish_time_ms: finish,
        }
    }

    fn state_of(entries: Vec<RoundEntry>, elapsed_ms: f64) -> RoundState {
        let complete = entries.iter().all(|e| e.finish_time_ms.is_some());
        RoundState {
            round_id: RoundId(1),
            distance: 1000.0,
            elapsed_ms,
            entries,
            complete,
        }
    }

    #[test]
    fn test_finish_time_orders_first() {
        let a = entry(1, 1, 1000.0, Some(61_000.0));
        let b = entry(2, 2, 1000.0, Some(60_000.0));
        assert_eq!(compare_entries(&a, &b), Ordering::Greater);
        assert_eq!(compare_entries(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_unfinished_rank_last_by_distance() {
        let finished = entry(1, 3, 1000.0, Some(90_000.0));
        let close = entry(2, 2, 990.0, None);
        let far = entry(3, 1, 900.0, None);

        assert_eq!(compare_entries(&finished, &close), Ordering::Less);
        assert_eq!(compare_entries(&close, &far), Ordering::Less);
    }

    #[test]
    fn test_lane_breaks_exact_ties() {
        let a = entry(1, 4, 1000.0, Some(60_000.0));
        let b = entry(2, 2, 1000.0, Some(60_000.0));
        assert_eq!(compare_entries(&b, &a), Ordering::Less);
        assert_eq!(compare_entries(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_order_is_strict_for_distinct_lanes() {
        let entries = vec![
            entry(1, 1, 1000.0, Some(60_000.0)),
            entry(2, 2, 1000.0, Some(60_000.0)),
            entry(3, 3, 950.0, None),
            entry(4, 4, 950.0, None),
            entry(5, 5, 1000.0, Some(59_999.5)),
        ];
        for (i, a) in entries.iter().enumerate() {
            for (j, b) in entries.iter().enumerate() {
                let forward = compare_entries(a, b);
                assert_eq!(forward, compare_entries(b, a).reverse());
                assert_eq!(forward == Ordering::Equal, i == j);
            }
        }
    }

    #[test]
    fn test_build_result_positions_and_snapshot() {
        let pool = uniform_pool(3, 70, 15.0);
        let lookup = lookup_of(&pool);
        let state = state_of(
            vec![
                entry(1, 1, 1000.0, Some(62_000.0)),
                entry(2, 2, 1000.0, Some(61_000.0)),
                entry(3, 3, 1000.0, Some(63_000.0)),
            ],
            63_050.0,
        );

        let result = build_result(&state, &lookup).unwrap();
        let order: Vec<_> = result.placements.iter().map(|p| p.competitor_id.0).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(
            result.placements.iter().map(|p| p.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(result.finished_at_ms, 63_050.0);
        assert_eq!(result.distance, 1000.0);

        let first = &result.placements[0];
        assert_eq!(first.name, "Runner 2");
        assert_eq!(first.lane, Lane(2));
        assert_eq!(first.finish_time_ms, 61_000.0);
        assert_eq!(first.best_speed, 18.0);
        assert_eq!(first.condition, 70);
    }

    #[test]
    fn test_unfinished_fall_back_to_elapsed() {
        let pool = uniform_pool(2, 50, 15.0);
        let lookup = lookup_of(&pool);
        let state = state_of(
            vec![entry(1, 1, 400.0, None), entry(2, 2, 1000.0, Some(20_000.0))],
            30_000.0,
        );

        let result = build_result(&state, &lookup).unwrap();
        assert_eq!(result.placements[0].competitor_id, CompetitorId(2));
        assert_eq!(result.placements[1].finish_time_ms, 30_000.0);
    }

    #[test]
    fn test_build_result_is_idempotent() {
        let pool = uniform_pool(3, 50, 15.0);
        let lookup = lookup_of(&pool);
        let state = state_of(
            vec![
                entry(1, 1, 1000.0, Some(60_000.0)),
                entry(2, 2, 1000.0, Some(60_000.0)),
                entry(3, 3, 1000.0, Some(59_000.0)),
            ],
            60_000.0,
        );

        assert_eq!(
            build_result(&state, &lookup).unwrap(),
            build_result(&state, &lookup).unwrap()
        );
    }

    #[test]
    fn test_missing_competitor() {
        let pool = uniform_pool(1, 50, 15.0);
        let lookup = lookup_of(&pool);
        let state = state_of(
            vec![entry(1, 1, 1000.0, Some(1.0)), entry(7, 2, 1000.0, Some(2.0))],
            2.0,
        );

        assert_eq!(
            build_result(&state, &lookup).unwrap_err(),
            SimError::MissingCompetitor(CompetitorId(7))
        );
    }
}
