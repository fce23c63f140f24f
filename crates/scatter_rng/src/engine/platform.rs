//! Platform-fallback deviate engine over the ambient thread-local stream.
//!
//! This backend exists so the layer always has a working engine when no other
//! backend is wanted. Uniforms come from the process's ambient thread-local
//! generator; normals are synthesised with the crate's Box–Muller transform.
//!
//! # Limitation
//!
//! The underlying stream cannot be reseeded, so this backend is **not**
//! seed-reproducible: the seed passed to `from_seed` is recorded for
//! diagnostics only. Each thread draws from its own stream, so concurrent
//! workers do not contaminate each other's sequences, but no worker can
//! replay a run.

use rand::Rng;

use super::DeviateEngine;
use crate::boxmuller;

/// Platform-fallback deviate engine.
///
/// See the module documentation for the reproducibility limitation.
///
/// # Examples
///
/// ```rust
/// use scatter_rng::{DeviateEngine, PlatformEngine};
///
/// let mut rng = PlatformEngine::from_seed(42);
/// let u = rng.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Clone, Debug)]
pub struct PlatformEngine {
    /// Advisory seed, recorded for diagnostics only.
    seed: u64,
}

impl PlatformEngine {
    /// Returns the advisory seed recorded at initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DeviateEngine for PlatformEngine {
    fn from_seed(seed: u64) -> Self {
        tracing::debug!(
            seed,
            "platform backend draws from the ambient thread-local stream; the seed does not reseed it"
        );
        Self { seed }
    }

    #[inline]
    fn gen_uniform(&mut self) -> f64 {
        rand::thread_rng().gen()
    }

    /// Single-draw wrapper around the batch path with n = 1.
    #[inline]
    fn gen_normal(&mut self) -> f64 {
        let mut r = [0.0];
        self.fill_normal(&mut r);
        r[0]
    }

    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        let mut rng = rand::thread_rng();
        for slot in buffer.iter_mut() {
            *slot = rng.gen();
        }
    }

    fn fill_normal(&mut self, buffer: &mut [f64]) {
        let mut rng = rand::thread_rng();
        boxmuller::fill_normal(|| rng.gen(), buffer);
    }
}
