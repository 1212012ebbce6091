//! Fixtures shared by the engine and driver tests.

use raceday_core::UniformSource;
use raceday_types::{
    lookup_from_pool, Competitor, CompetitorId, CompetitorLookup, RoundDefinition, RoundId,
    RoundStatus,
};

/// Build a competitor with explicit attributes.
pub fn competitor(id: u32, condition: u8, base_pace: f64) -> Competitor {
    Competitor {
        id: CompetitorId(id),
        name: format!("Runner {}", id),
        color: format!("#{:06x}", (id * 0x0a_0b0c) & 0xff_ffff),
        condition,
        base_pace,
    }
}

/// Build `count` competitors with ids `1..=count` and identical attributes.
pub fn uniform_pool(count: u32, condition: u8, base_pace: f64) -> Vec<Competitor> {
    (1..=count)
        .map(|id| competitor(id, condition, base_pace))
        .collect()
}

/// Lookup over the given competitors.
pub fn lookup_of(competitors: &[Competitor]) -> CompetitorLookup {
    lookup_from_pool(competitors)
}

/// A not-yet-started round over the given competitors, in lane order.
pub fn round_over(id: u32, distance: f64, competitors: &[Competitor]) -> RoundDefinition {
    RoundDefinition {
        id: RoundId(id),
        distance,
        competitor_ids: competitors.iter().map(|c| c.id).collect(),
        status: RoundStatus::NotStarted,
    }
}

/// Uniform source that always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource(pub f64);

impl UniformSource for ConstantSource {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// Uniform source that replays a script, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "script must not be empty");
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
