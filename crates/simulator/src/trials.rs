//! Head-to-head trials.
//!
//! Races two competitors of equal base pace but different condition many
//! times over. Trials are independent and each owns its own generator seeded
//! from the trial index, so the outcome does not depend on thread count.

use crate::config::TrialConfig;
use raceday_core::{EntropyRng, SimError};
use raceday_engine::{build_result, run_to_completion, start_round, SpeedModel};
use raceday_types::{
    lookup_from_pool, Competitor, CompetitorId, RoundDefinition, RoundId, RoundStatus,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Outcome of a batch of head-to-head trials.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrialSummary {
    pub trials: usize,
    pub high_wins: usize,
    pub high_condition: u8,
    pub low_condition: u8,
}

impl TrialSummary {
    /// Share of trials won by the higher-condition competitor.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.high_wins as f64 / self.trials as f64
        }
    }
}

fn contender(id: u32, name: &str, color: &str, condition: u8, base_pace: f64) -> Competitor {
    Competitor {
        id: CompetitorId(id),
        name: name.to_string(),
        color: color.to_string(),
        condition,
        base_pace,
    }
}

/// Run the configured trials in parallel.
pub fn run_head_to_head(
    config: &TrialConfig,
    model: &SpeedModel,
    seed: u64,
) -> Result<TrialSummary, SimError> {
    model.validate()?;

    let high = contender(1, "High", "#e6194b", config.high_condition, config.base_pace);
    let low = contender(2, "Low", "#4363d8", config.low_condition, config.base_pace);
    let lookup = lookup_from_pool(&[high, low]);

    let outcomes = (0..config.trials)
        .into_par_iter()
        .map(|trial| -> Result<bool, SimError> {
            // Alternate lanes so the lane tie-break favors neither side.
            let competitor_ids = if trial % 2 == 0 {
                vec![CompetitorId(1), CompetitorId(2)]
            } else {
                vec![CompetitorId(2), CompetitorId(1)]
            };
            let definition = RoundDefinition {
                id: RoundId(trial as u32 + 1),
                distance: config.distance,
                competitor_ids,
                status: RoundStatus::NotStarted,
            };

            let mut rng = EntropyRng::seeded(seed.wrapping_add(trial as u64));
            let mut state = start_round(&definition, &lookup)?;
            run_to_completion(&mut state, &lookup, &mut rng, model)?;
            let result = build_result(&state, &lookup)?;

            Ok(result.winner().map(|p| p.competitor_id) == Some(CompetitorId(1)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let summary = TrialSummary {
        trials: outcomes.len(),
        high_wins: outcomes.iter().filter(|&&won| won).count(),
        high_condition: config.high_condition,
        low_condition: config.low_condition,
    };
    info!(
        trials = summary.trials,
        high_wins = summary.high_wins,
        win_rate = summary.win_rate(),
        "Head-to-head trials finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_condition_dominates() {
        let config = TrialConfig {
            trials: 100,
            ..Default::default()
        };
        let summary = run_head_to_head(&config, &SpeedModel::default(), 42).unwrap();

        assert_eq!(summary.trials, 100);
        assert!(summary.win_rate() > 0.8, "win rate {}", summary.win_rate());
    }

    #[test]
    fn test_trials_are_reproducible() {
        let config = TrialConfig {
            trials: 40,
            high_condition: 55,
            low_condition: 50,
            ..Default::default()
        };
        let a = run_head_to_head(&config, &SpeedModel::default(), 9).unwrap();
        let b = run_head_to_head(&config, &SpeedModel::default(), 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_trials() {
        let config = TrialConfig {
            trials: 0,
            ..Default::default()
        };
        let summary = run_head_to_head(&config, &SpeedModel::default(), 1).unwrap();
        assert_eq!(summary.win_rate(), 0.0);
    }

    #[test]
    fn test_invalid_model_rejected() {
        let model = SpeedModel::default().with_min_speed(-1.0);
        assert!(run_head_to_head(&TrialConfig::default(), &model, 1).is_err());
    }
}
