//! Core primitives for the Raceday engine.
//!
//! - [`UniformSource`]: the randomness abstraction every engine operation consumes
//! - [`SeededRng`]: reproducible Park–Miller stream for program generation
//! - [`EntropyRng`]: adapter over `rand` generators for live play
//! - [`shuffle`] / [`sample`]: unbiased permutation and sampling helpers
//! - [`SimError`]: the engine's error taxonomy

mod error;
mod rng;
mod sampling;
mod traits;

pub use error::SimError;
pub use rng::{EntropyRng, SeededRng};
pub use sampling::{sample, shuffle};
pub use traits::UniformSource;
