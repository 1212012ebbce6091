//! Competitor pool generation.

use crate::catalog::{COLORS, NAMES};
use crate::config::{PACE_CONDITION_SCALE, PACE_FLOOR, PACE_RANDOM_SPREAD, POOL_SIZE};
use raceday_core::{sample, SeededRng, SimError, UniformSource};
use raceday_types::{Competitor, CompetitorId, CONDITION_MAX, CONDITION_MIN};
use tracing::{debug, info};

/// Generate `count` competitors.
///
/// Names and colors are sampled without replacement from the curated lists,
/// so no two competitors share either. Output follows the sampled name order
/// and ids follow output position.
pub fn generate_pool(
    count: usize,
    rng: &mut impl UniformSource,
) -> Result<Vec<Competitor>, SimError> {
    if count > NAMES.len() {
        return Err(SimError::NotEnoughNames {
            requested: count,
            available: NAMES.len(),
        });
    }
    if count > COLORS.len() {
        return Err(SimError::NotEnoughColors {
            requested: count,
            available: COLORS.len(),
        });
    }

    let names = sample(&NAMES[..], count, rng)?;
    let colors = sample(&COLORS[..], count, rng)?;

    let pool: Vec<Competitor> = names
        .into_iter()
        .zip(colors)
        .enumerate()
        .map(|(position, (name, color))| {
            let condition =
                rng.range_inclusive_u32(u32::from(CONDITION_MIN), u32::from(CONDITION_MAX)) as u8;
            let base_pace = PACE_FLOOR
                + f64::from(condition) * PACE_CONDITION_SCALE
                + rng.next_f64() * PACE_RANDOM_SPREAD;

            let competitor = Competitor {
                id: CompetitorId::from_position(position),
                name: name.to_string(),
                color: color.to_string(),
                condition,
                base_pace,
            };
            debug!(
                id = %competitor.id,
                name = %competitor.name,
                condition,
                base_pace,
                "Generated competitor"
            );
            competitor
        })
        .collect();

    info!(count = pool.len(), "Generated competitor pool");
    Ok(pool)
}

/// Generate the standard-size pool from a seed.
pub fn generate_pool_from_seed(seed: i64) -> Result<Vec<Competitor>, SimError> {
    let mut rng = SeededRng::new(seed);
    generate_pool(POOL_SIZE, &mut rng)
}
