//! Program runner.

use crate::{DriverConfig, DriverError};
use raceday_core::{EntropyRng, UniformSource};
use raceday_engine::{
    advance_round, build_result, compute_leaderboard, run_to_completion, start_round, Program,
    SpeedModel,
};
use raceday_types::{
    CompetitorLookup, LeaderboardRow, RoundDefinition, RoundResult, RoundState, RoundStatus,
};
use tracing::{debug, info, warn};

/// Counters collected while driving a program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverStats {
    /// Rounds that reached completion.
    pub rounds_completed: usize,

    /// Engine ticks applied across all rounds.
    pub total_ticks: u64,

    /// Frame time dropped because a frame exceeded its tick budget (ms).
    pub dropped_ms: f64,
}

/// Drives one program from its first round to its last.
///
/// Exactly one round is active at a time. The runner owns the live
/// randomness, which is separate from the seeded stream that generated the
/// program.
pub struct ProgramRunner<R = EntropyRng> {
    program: Program,
    lookup: CompetitorLookup,
    rng: R,
    model: SpeedModel,
    config: DriverConfig,

    /// Index of the next round to start.
    next_round: usize,

    /// Active round; kept after completion until the next round starts.
    active: Option<RoundState>,

    /// Frame time not yet consumed by a whole tick.
    pending_ms: f64,

    history: im::Vector<RoundResult>,
    stats: DriverStats,
}

impl ProgramRunner<EntropyRng> {
    /// Runner for a seeded program with non-reproducible live randomness.
    pub fn live(seed: i64) -> Result<Self, DriverError> {
        let program = Program::generate(seed)?;
        Self::new(
            program,
            EntropyRng::from_entropy(),
            SpeedModel::default(),
            DriverConfig::default(),
        )
    }
}

impl<R: UniformSource> ProgramRunner<R> {
    /// Create a runner. The driver's tick size replaces the model's.
    pub fn new(
        program: Program,
        rng: R,
        model: SpeedModel,
        config: DriverConfig,
    ) -> Result<Self, DriverError> {
        config.validate()?;
        let model = model.with_step_ms(config.step_ms);
        model.validate()?;

        let lookup = program.lookup();
        info!(
            seed = program.seed,
            rounds = program.rounds.len(),
            step_ms = config.step_ms,
            "Created program runner"
        );

        Ok(Self {
            program,
            lookup,
            rng,
            model,
            config,
            next_round: 0,
            active: None,
            pending_ms: 0.0,
            history: im::Vector::new(),
            stats: DriverStats::default(),
        })
    }

    /// Start the next scheduled round.
    pub fn start_next_round(&mut self) -> Result<&RoundState, DriverError> {
        if let Some(state) = self.active.as_ref().filter(|s| !s.complete) {
            return Err(DriverError::RoundInProgress(state.round_id));
        }
        let definition = self
            .program
            .rounds
            .get_mut(self.next_round)
            .ok_or(DriverError::ProgramFinished)?;

        let state = start_round(definition, &self.lookup)?;
        definition.status = RoundStatus::Running;
        info!(round = %definition.id, distance = definition.distance, "Round started");

        self.next_round += 1;
        self.pending_ms = 0.0;
        Ok(self.active.insert(state))
    }

    /// Advance the active round by one frame's worth of simulated time.
    ///
    /// The frame is consumed in whole `step_ms` ticks; a remainder carries
    /// into the next frame. At most `max_ticks_per_frame` ticks run per call.
    /// Returns the result when this frame completes the round.
    pub fn advance_frame(&mut self, dt_ms: f64) -> Result<Option<RoundResult>, DriverError> {
        let state = match self.active.as_mut() {
            Some(state) if !state.complete => state,
            _ => return Err(DriverError::NoActiveRound),
        };
        if !dt_ms.is_finite() || dt_ms <= 0.0 {
            return Ok(None);
        }

        self.pending_ms += dt_ms;
        let step = self.config.step_ms;
        let mut ticks = 0u32;

        while self.pending_ms >= step && !state.complete {
            if ticks == self.config.max_ticks_per_frame {
                warn!(
                    round = %state.round_id,
                    dropped_ms = self.pending_ms,
                    budget = self.config.max_ticks_per_frame,
                    "Frame exceeded tick budget"
                );
                self.stats.dropped_ms += self.pending_ms;
                self.pending_ms = 0.0;
                break;
            }
            advance_round(state, step, &self.lookup, &mut self.rng, &self.model)?;
            self.pending_ms -= step;
            ticks += 1;
        }
        self.stats.total_ticks += u64::from(ticks);

        if state.complete {
            self.finish_active().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Run the active round (starting the next one if none is running) to
    /// completion.
    pub fn run_round_to_completion(&mut self) -> Result<RoundResult, DriverError> {
        if !self.active.as_ref().is_some_and(|s| !s.complete) {
            self.start_next_round()?;
        }
        let state = self.active.as_mut().ok_or(DriverError::NoActiveRound)?;

        let before = state.elapsed_ms;
        run_to_completion(state, &self.lookup, &mut self.rng, &self.model)?;
        self.stats.total_ticks += ((state.elapsed_ms - before) / self.config.step_ms).round() as u64;

        self.finish_active()
    }

    /// Run every remaining round. Returns the full history.
    pub fn run_to_end(&mut self) -> Result<im::Vector<RoundResult>, DriverError> {
        while !self.is_finished() {
            self.run_round_to_completion()?;
        }
        info!(
            rounds = self.history.len(),
            ticks = self.stats.total_ticks,
            "Program finished"
        );
        Ok(self.history())
    }

    fn finish_active(&mut self) -> Result<RoundResult, DriverError> {
        let state = self.active.as_ref().ok_or(DriverError::NoActiveRound)?;
        let result = build_result(state, &self.lookup)?;

        if let Some(definition) = self
            .program
            .rounds
            .iter_mut()
            .find(|d| d.id == state.round_id)
        {
            definition.status = RoundStatus::Complete;
        }
        debug!(round = %state.round_id, elapsed_ms = state.elapsed_ms, "Round recorded");

        self.history.push_back(result.clone());
        self.stats.rounds_completed += 1;
        self.pending_ms = 0.0;
        Ok(result)
    }

    /// Snapshot of every result so far. Cheap to clone and hold.
    pub fn history(&self) -> im::Vector<RoundResult> {
        self.history.clone()
    }

    /// Standings recomputed from the history.
    pub fn leaderboard(&self) -> Vec<LeaderboardRow> {
        compute_leaderboard(&self.program.competitors, self.history.iter())
    }

    /// Whether every round has completed.
    pub fn is_finished(&self) -> bool {
        self.next_round >= self.program.rounds.len()
            && self.active.as_ref().map_or(true, |s| s.complete)
    }

    /// The active (or just completed) round.
    pub fn current_round(&self) -> Option<&RoundState> {
        self.active.as_ref()
    }

    /// Scheduled rounds with their current status.
    pub fn rounds(&self) -> &[RoundDefinition] {
        &self.program.rounds
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn lookup(&self) -> &CompetitorLookup {
        &self.lookup
    }

    pub fn stats(&self) -> &DriverStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raceday_core::{SeededRng, SimError};
    use raceday_engine::ROUND_DISTANCES;
    use raceday_test_helpers::ConstantSource;
    use tracing_test::traced_test;

    fn runner(seed: i64) -> ProgramRunner<SeededRng> {
        let program = Program::generate(seed).unwrap();
        ProgramRunner::new(
            program,
            SeededRng::new(seed ^ 0x5eed),
            SpeedModel::default(),
            DriverConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_status_transitions() {
        let mut runner = runner(42);
        assert!(runner
            .rounds()
            .iter()
            .all(|r| r.status == RoundStatus::NotStarted));

        runner.start_next_round().unwrap();
        assert_eq!(runner.rounds()[0].status, RoundStatus::Running);
        assert_eq!(runner.rounds()[1].status, RoundStatus::NotStarted);

        let result = loop {
            if let Some(result) = runner.advance_frame(1000.0).unwrap() {
                break result;
            }
        };
        assert_eq!(result.round_id, runner.rounds()[0].id);
        assert_eq!(runner.rounds()[0].status, RoundStatus::Complete);
        assert!(runner.current_round().unwrap().complete);
        assert_eq!(runner.history().len(), 1);
    }

    #[test]
    fn test_cannot_start_while_running() {
        let mut runner = runner(1);
        runner.start_next_round().unwrap();
        let round_id = runner.rounds()[0].id;

        assert_eq!(
            runner.start_next_round().unwrap_err(),
            DriverError::RoundInProgress(round_id)
        );
    }

    #[test]
    fn test_advance_without_round() {
        let mut runner = runner(1);
        assert_eq!(
            runner.advance_frame(16.0).unwrap_err(),
            DriverError::NoActiveRound
        );
    }

    #[test]
    fn test_frame_remainder_carries_over() {
        let mut runner = runner(3);
        runner.start_next_round().unwrap();

        runner.advance_frame(30.0).unwrap();
        assert_eq!(runner.current_round().unwrap().elapsed_ms, 0.0);

        runner.advance_frame(30.0).unwrap();
        assert_eq!(runner.current_round().unwrap().elapsed_ms, 50.0);
        assert_eq!(runner.stats().total_ticks, 1);
    }

    #[traced_test]
    #[test]
    fn test_frame_tick_budget_is_enforced() {
        let program = Program::generate(5).unwrap();
        let config = DriverConfig::default().with_max_ticks_per_frame(4);
        let mut runner =
            ProgramRunner::new(program, SeededRng::new(5), SpeedModel::default(), config)
                .unwrap();
        runner.start_next_round().unwrap();

        runner.advance_frame(1000.0).unwrap();
        assert_eq!(runner.current_round().unwrap().elapsed_ms, 200.0);
        assert_eq!(runner.stats().dropped_ms, 800.0);
        assert!(logs_contain("Frame exceeded tick budget"));
    }

    #[test]
    fn test_run_to_end_completes_every_round() {
        let mut runner = runner(42);
        let history = runner.run_to_end().unwrap();

        assert!(runner.is_finished());
        assert_eq!(history.len(), ROUND_DISTANCES.len());
        assert!(runner
            .rounds()
            .iter()
            .all(|r| r.status == RoundStatus::Complete));
        assert_eq!(runner.stats().rounds_completed, ROUND_DISTANCES.len());
        assert_eq!(
            runner.start_next_round().unwrap_err(),
            DriverError::ProgramFinished
        );
    }

    #[test]
    fn test_leaderboard_matches_history_fold() {
        let mut runner = runner(8);
        runner.run_to_end().unwrap();

        let history: Vec<RoundResult> = runner.history().into_iter().collect();
        let expected = compute_leaderboard(&runner.program().competitors, &history);
        assert_eq!(runner.leaderboard(), expected);
    }

    #[test]
    fn test_history_snapshot_is_stable() {
        let mut runner = runner(13);
        runner.run_round_to_completion().unwrap();
        let snapshot = runner.history();

        runner.run_round_to_completion().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(runner.history().len(), 2);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = runner(77).run_to_end().unwrap();
        let b = runner(77).run_to_end().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let program = Program::generate(1).unwrap();
        let err = ProgramRunner::new(
            program.clone(),
            ConstantSource(0.5),
            SpeedModel::default(),
            DriverConfig::default().with_step_ms(0.0),
        )
        .err()
        .unwrap();
        assert!(matches!(err, DriverError::InvalidConfig(_)));

        let err = ProgramRunner::new(
            program,
            ConstantSource(0.5),
            SpeedModel::default().with_min_speed(0.0),
            DriverConfig::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, DriverError::Sim(SimError::InvalidModel(_))));
    }
}
