//! Shuffling and sampling over a [`UniformSource`].

use crate::{SimError, UniformSource};

/// Shuffle in place with the Fisher–Yates swap-down.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen index in `[0, i]`, so every permutation is equally likely.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl UniformSource) {
    for i in (1..items.len()).rev() {
        let j = rng.index_below(i + 1);
        items.swap(i, j);
    }
}

/// Sample `count` items without replacement.
///
/// Returns the first `count` items of a shuffled copy of `population`.
pub fn sample<T: Clone>(
    population: &[T],
    count: usize,
    rng: &mut impl UniformSource,
) -> Result<Vec<T>, SimError> {
    if count > population.len() {
        return Err(SimError::SampleTooLarge {
            requested: count,
            available: population.len(),
        });
    }

    let mut items = population.to_vec();
    shuffle(&mut items, rng);
    items.truncate(count);
    Ok(items)
}
