//! Core traits for randomness consumers.

/// A source of uniform floats in `[0, 1)`.
///
/// This is the only randomness abstraction the engine consumes. Pool and
/// schedule construction use the reproducible [`SeededRng`](crate::SeededRng);
/// live play can plug in any `rand` generator through
/// [`EntropyRng`](crate::EntropyRng).
///
/// # Guarantees
///
/// - **Synchronous**: Drawing never blocks
/// - **Deterministic**: A seeded implementation yields the same stream every run
/// - **No I/O**: Implementations never touch platform entropy after construction
///
/// # Example
///
/// ```ignore
/// let mut rng = SeededRng::new(42);
/// let condition = rng.range_inclusive_u32(1, 100);
/// let jitter = rng.range_f64(0.0, 1.5);
/// ```
pub trait UniformSource {
    /// Draw the next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform float in `[lo, hi)`.
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform integer in `[lo, hi]`.
    fn range_inclusive_u32(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo) as f64 + 1.0;
        // next_f64 < 1 keeps the floor inside the span.
        lo + ((self.next_f64() * span).floor() as u32).min(hi - lo)
    }

    /// Uniform index in `[0, n)`. Returns 0 when `n` is 0.
    fn index_below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.next_f64() * n as f64).floor() as usize).min(n - 1)
    }
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}
