//! Race simulation engine.
//!
//! Everything here is synchronous, single-threaded and free of I/O. A driver
//! generates a [`Program`], starts each scheduled round, steps it with
//! [`advance_round`], and folds finished rounds into standings:
//!
//! ```text
//! SeededRng ──► generate_pool ──► generate_schedule
//!                     │                   │
//!                     ▼                   ▼
//!               CompetitorLookup ──► start_round ──► advance_round (per tick)
//!                                                        │
//!                                                        ▼
//!                         compute_leaderboard ◄── build_result
//! ```

pub mod catalog;
pub mod config;
mod leaderboard;
mod pool;
mod program;
mod ranking;
mod round;
mod schedule;

pub use config::{
    SpeedModel, ENTRANTS_PER_ROUND, PACE_CONDITION_SCALE, PACE_FLOOR, PACE_RANDOM_SPREAD,
    POOL_SIZE, ROUND_DISTANCES,
};
pub use leaderboard::{compute_leaderboard, points_for_position};
pub use pool::{generate_pool, generate_pool_from_seed};
pub use program::Program;
pub use ranking::{build_result, compare_entries, rank_entries};
pub use round::{advance_round, run_to_completion, start_round, tick_speed};
pub use schedule::{generate_schedule, generate_schedule_with};
