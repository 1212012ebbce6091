//! Round simulation.
//!
//! A round moves through three phases:
//!
//! ```text
//! NotStarted ──advance──► Running ──all entries finished──► Complete
//! ```
//!
//! Each tick computes a fresh speed for every unfinished entry, moves it
//! forward, and interpolates the exact crossing instant inside the tick when
//! it reaches the line. Finished entries are frozen.

use crate::config::SpeedModel;
use raceday_core::{SimError, UniformSource};
use raceday_types::{
    Competitor, CompetitorLookup, Lane, RoundDefinition, RoundEntry, RoundState,
};
use tracing::{debug, trace};

/// Milliseconds per second; speeds are m/s, time is ms.
const MS_PER_SECOND: f64 = 1000.0;

/// Create the simulation state for a scheduled round.
///
/// Entries follow the definition's order and take lanes `1..=N` from it.
pub fn start_round(
    definition: &RoundDefinition,
    lookup: &CompetitorLookup,
) -> Result<RoundState, SimError> {
    let entries = definition
        .competitor_ids
        .iter()
        .enumerate()
        .map(|(position, id)| {
            if lookup.contains_key(id) {
                Ok(RoundEntry::new(*id, Lane::from_position(position)))
            } else {
                Err(SimError::MissingCompetitor(*id))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        round = %definition.id,
        distance = definition.distance,
        entrants = entries.len(),
        "Starting round"
    );

    Ok(RoundState {
        round_id: definition.id,
        distance: definition.distance,
        elapsed_ms: 0.0,
        complete: entries.is_empty(),
        entries,
    })
}

/// Instantaneous speed (m/s) for a competitor at a progress ratio.
///
/// Draws the pulse first and, only once `ratio` passes the kick threshold, the
/// kick.
pub fn tick_speed(
    competitor: &Competitor,
    ratio: f64,
    rng: &mut impl UniformSource,
    model: &SpeedModel,
) -> f64 {
    let condition = model.condition_multiplier(competitor.condition);
    let pulse = model.pulse_min + rng.next_f64() * model.pulse_spread;
    let fatigue = model.fatigue_factor(ratio);
    let kick = if ratio > model.kick_threshold {
        model.kick_base + rng.next_f64() * model.kick_spread
    } else {
        1.0
    };

    (competitor.base_pace * condition * pulse * fatigue * kick).max(model.min_speed)
}

/// Advance a round by `dt_ms` of simulated time.
///
/// A non-positive or non-finite increment, or a complete round, is a no-op.
/// Every unfinished entrant is resolved in `lookup` before anything is
/// mutated, so a missing competitor leaves the state untouched.
pub fn advance_round(
    state: &mut RoundState,
    dt_ms: f64,
    lookup: &CompetitorLookup,
    rng: &mut impl UniformSource,
    model: &SpeedModel,
) -> Result<(), SimError> {
    if state.complete || !dt_ms.is_finite() || dt_ms <= 0.0 {
        return Ok(());
    }
    debug_assert!(model.min_speed > 0.0, "speed floor must be positive");

    let runners = state
        .entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_finished())
        .map(|(index, entry)| {
            lookup
                .get(&entry.competitor_id)
                .map(|competitor| (index, competitor))
                .ok_or(SimError::MissingCompetitor(entry.competitor_id))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let distance = state.distance;
    let tick_end_ms = state.elapsed_ms + dt_ms;

    for (index, competitor) in runners {
        let entry = &mut state.entries[index];

        let ratio = entry.distance_covered / distance;
        let speed = tick_speed(competitor, ratio, rng, model);
        let tentative = entry.distance_covered + speed * dt_ms / MS_PER_SECOND;

        entry.distance_covered = tentative.min(distance);
        entry.progress = (entry.distance_covered / distance).min(1.0);
        entry.last_speed = speed;
        entry.best_speed = entry.best_speed.max(speed);

        if entry.distance_covered >= distance && entry.finish_time_ms.is_none() {
            let overshoot = (tentative - distance).max(0.0);
            let overshoot_ms = overshoot / speed * MS_PER_SECOND;
            let finish_time_ms = tick_end_ms - overshoot_ms;
            entry.finish_time_ms = Some(finish_time_ms);

            debug!(
                round = %state.round_id,
                competitor = %entry.competitor_id,
                lane = entry.lane.0,
                finish_time_ms,
                "Crossed the line"
            );
        } else {
            trace!(
                competitor = %entry.competitor_id,
                speed,
                progress = entry.progress,
                "Tick"
            );
        }
    }

    state.elapsed_ms = tick_end_ms;
    state.complete = state.entries.iter().all(RoundEntry::is_finished);

    if state.complete {
        debug!(
            round = %state.round_id,
            elapsed_ms = state.elapsed_ms,
            "Round complete"
        );
    }
    Ok(())
}

/// Step a round with `model.step_ms` ticks until it completes.
///
/// Fails with [`SimError::SimulationTimeout`] once elapsed time reaches
/// `model.safety_ceiling_ms` without completion.
pub fn run_to_completion(
    state: &mut RoundState,
    lookup: &CompetitorLookup,
    rng: &mut impl UniformSource,
    model: &SpeedModel,
) -> Result<(), SimError> {
    model.validate()?;

    while !state.complete {
        if state.elapsed_ms >= model.safety_ceiling_ms {
            return Err(SimError::SimulationTimeout {
                round: state.round_id,
                elapsed_ms: state.elapsed_ms,
                ceiling_ms: model.safety_ceiling_ms,
            });
        }
        advance_round(state, model.step_ms, lookup, rng, model)?;
    }
    Ok(())
}
