//! Uniform random sources.
//!
//! Every sampler in this crate consumes uniform draws through the
//! [`UniformSource`] trait, so the randomness primitive can be swapped for a
//! deterministic stand-in in tests.
//!
//! # Reproducibility
//!
//! For reproducible runs, use [`create_source`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform. [`clock_seed`] gives the seed used by the
//! interactive session when none is supplied.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// A producer of uniform values on `[0, 1)`.
pub trait UniformSource {
    /// Returns the next uniform draw.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adapts an integer generator to [`UniformSource`].
///
/// Each draw is `next_u32() / u32::MAX`. The ceiling `1.0` is therefore
/// reachable, with probability 2⁻³².
///
/// # Examples
/// ```
/// use u_sampling::random::{create_source, UniformSource};
/// let mut source = create_source(42);
/// let u = source.next_uniform();
/// assert!((0.0..=1.0).contains(&u));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the adapter and returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.next_u32() as f64 / u32::MAX as f64
    }
}

/// Creates a fast, seeded uniform source.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_sampling::random::{create_source, UniformSource};
/// let mut a = create_source(7);
/// let mut b = create_source(7);
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// ```
pub fn create_source(seed: u64) -> RngSource<SmallRng> {
    RngSource::new(SmallRng::seed_from_u64(seed))
}

/// Current Unix time in whole seconds.
///
/// Falls back to `0` if the system clock reads earlier than the epoch.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Deterministic source that replays a fixed list of values.
///
/// Values are returned in order and the list wraps around once exhausted.
/// The number of draws taken so far is available from [`ReplaySource::draws`].
///
/// # Examples
/// ```
/// use u_sampling::random::{ReplaySource, UniformSource};
/// let mut source = ReplaySource::new(vec![0.25, 0.75]);
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.next_uniform(), 0.75);
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.draws(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySource {
    values: Vec<f64>,
    draws: usize,
}

impl ReplaySource {
    /// Creates a replay source.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ReplaySource needs at least one value");
        Self { values, draws: 0 }
    }

    /// Number of uniform draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        let u = self.values[self.draws % self.values.len()];
        self.draws += 1;
        u
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn draws_stay_in_unit_interval(seed in any::<u64>()) {
            let mut source = create_source(seed);
            for _ in 0..100 {
                let u = source.next_uniform();
                prop_assert!((0.0..=1.0).contains(&u), "u = {u}");
            }
        }

        #[test]
        fn replay_returns_values_in_order(
            values in proptest::collection::vec(0.0_f64..1.0, 1..20),
        ) {
            let mut source = ReplaySource::new(values.clone());
            for &v in &values {
                prop_assert_eq!(source.next_uniform(), v);
            }
            prop_assert_eq!(source.draws(), values.len());
        }
    }
}
