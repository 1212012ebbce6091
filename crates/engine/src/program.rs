//! A generated program: pool plus schedule from one seeded stream.

use crate::config::POOL_SIZE;
use crate::pool::generate_pool;
use crate::schedule::generate_schedule;
use raceday_core::{SeededRng, SimError};
use raceday_types::{lookup_from_pool, Competitor, CompetitorLookup, RoundDefinition};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Pool and schedule for one run of the simulator.
///
/// The pool is drawn first and the schedule continues the same stream, so a
/// seed fully determines both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub seed: i64,
    pub competitors: Vec<Competitor>,
    pub rounds: Vec<RoundDefinition>,
}

impl Program {
    /// Generate the standard program for a seed.
    pub fn generate(seed: i64) -> Result<Self, SimError> {
        let mut rng = SeededRng::new(seed);
        let competitors = generate_pool(POOL_SIZE, &mut rng)?;
        let rounds = generate_schedule(&competitors, &mut rng)?;

        info!(
            seed,
            competitors = competitors.len(),
            rounds = rounds.len(),
            "Generated program"
        );

        Ok(Self {
            seed,
            competitors,
            rounds,
        })
    }

    /// Lookup over this program's competitors.
    pub fn lookup(&self) -> CompetitorLookup {
        lookup_from_pool(&self.competitors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROUND_DISTANCES;

    #[test]
    fn test_program_is_deterministic() {
        assert_eq!(Program::generate(42).unwrap(), Program::generate(42).unwrap());
    }

    #[test]
    fn test_program_references_its_pool() {
        let program = Program::generate(11).unwrap();
        let lookup = program.lookup();

        assert_eq!(program.rounds.len(), ROUND_DISTANCES.len());
        for round in &program.rounds {
            assert!(round.competitor_ids.iter().all(|id| lookup.contains_key(id)));
        }
    }
}
