//! Self-contained 64-bit linear-congruential deviate engine.
//!
//! The entire engine state is one unsigned 64-bit word advanced by the affine
//! recurrence `state' = a·state + b (mod 2^64)`. The multiplier and increment
//! are the LLNL pseudo-random number generator parameters, chosen for full
//! period modulo 2^64. This backend has no external generator dependency and
//! is the portable default.
//!
//! Normals are synthesised from uniforms with the Box–Muller transform in
//! [`crate::boxmuller`], using the policy selected at build time.

use super::DeviateEngine;
use crate::boxmuller;

/// Multiplier of the affine recurrence (LLNL parameterisation).
pub const LCG_MULTIPLIER: u64 = 2862933555777941757;

/// Increment of the affine recurrence (LLNL parameterisation).
pub const LCG_INCREMENT: u64 = 3037000493;

/// Linear-congruential deviate engine.
///
/// # Reproducibility
///
/// The output sequence is fully determined by the seed: two engines with the
/// same seed produce bit-identical sequences. Batch fills advance the same
/// recurrence as scalar draws, so `fill_uniform` over n slots is bit-identical
/// to n scalar `gen_uniform` calls.
///
/// # Examples
///
/// ```rust
/// use scatter_rng::{DeviateEngine, LcgEngine};
///
/// let mut a = LcgEngine::from_seed(12345);
/// let mut b = LcgEngine::from_seed(12345);
/// assert_eq!(a.gen_uniform(), b.gen_uniform());
/// ```
#[derive(Clone, Debug)]
pub struct LcgEngine {
    /// Current state word of the recurrence.
    state: u64,
    /// Seed used for initialisation, kept for diagnostics.
    seed: u64,
}

impl LcgEngine {
    /// Advances the recurrence and returns the raw 64-bit state word.
    ///
    /// Exposed for consumers that need integer deviates or want to drive a
    /// custom output mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scatter_rng::engine::lcg::{LcgEngine, LCG_INCREMENT, LCG_MULTIPLIER};
    /// use scatter_rng::DeviateEngine;
    ///
    /// let mut rng = LcgEngine::from_seed(1);
    /// let expected = LCG_MULTIPLIER.wrapping_mul(1).wrapping_add(LCG_INCREMENT);
    /// assert_eq!(rng.next_raw(), expected);
    /// ```
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DeviateEngine for LcgEngine {
    fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "seeded linear-congruential deviate engine");
        Self { state: seed, seed }
    }

    /// Returns the next state word mapped to [0, 1) by dividing by the
    /// largest representable 64-bit value.
    #[inline]
    fn gen_uniform(&mut self) -> f64 {
        self.next_raw() as f64 / u64::MAX as f64
    }

    /// Single-draw wrapper around the batch path with n = 1.
    #[inline]
    fn gen_normal(&mut self) -> f64 {
        let mut r = [0.0];
        self.fill_normal(&mut r);
        r[0]
    }

    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for slot in buffer.iter_mut() {
            *slot = self.gen_uniform();
        }
    }

    fn fill_normal(&mut self, buffer: &mut [f64]) {
        boxmuller::fill_normal(|| self.gen_uniform(), buffer);
    }
}
