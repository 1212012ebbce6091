//! Round schedule generation.

use crate::config::{ENTRANTS_PER_ROUND, ROUND_DISTANCES};
use raceday_core::{sample, SimError, UniformSource};
use raceday_types::{Competitor, CompetitorId, RoundDefinition, RoundId, RoundStatus};
use tracing::{debug, info};

/// Build one round per entry in [`ROUND_DISTANCES`].
///
/// Each round samples its entrants independently from the full pool, so a
/// competitor may run in several rounds (but never twice in one).
pub fn generate_schedule(
    pool: &[Competitor],
    rng: &mut impl UniformSource,
) -> Result<Vec<RoundDefinition>, SimError> {
    generate_schedule_with(pool, &ROUND_DISTANCES, ENTRANTS_PER_ROUND, rng)
}

/// Build a schedule with explicit distances and round size.
pub fn generate_schedule_with(
    pool: &[Competitor],
    distances: &[f64],
    entrants_per_round: usize,
    rng: &mut impl UniformSource,
) -> Result<Vec<RoundDefinition>, SimError> {
    if pool.len() < entrants_per_round {
        return Err(SimError::PoolTooSmall {
            pool: pool.len(),
            required: entrants_per_round,
        });
    }

    let ids: Vec<CompetitorId> = pool.iter().map(|c| c.id).collect();
    let mut schedule = Vec::with_capacity(distances.len());
    let mut round_id = RoundId::FIRST;

    for &distance in distances {
        let competitor_ids = sample(&ids, entrants_per_round, rng)?;
        debug!(round = %round_id, distance, entrants = ?competitor_ids, "Scheduled round");

        schedule.push(RoundDefinition {
            id: round_id,
            distance,
            competitor_ids,
            status: RoundStatus::NotStarted,
        });
        round_id = round_id.next();
    }

    info!(rounds = schedule.len(), entrants_per_round, "Generated schedule");
    Ok(schedule)
}
