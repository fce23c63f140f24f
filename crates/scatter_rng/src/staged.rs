//! Two-phase staged batch path for normal deviates.
//!
//! Bulk-generation execution models want uniform generation and the Gaussian
//! transform decoupled: first one bulk call fills a resident scratch stage
//! with uniforms, then a data-parallel kernel runs the Box–Muller pairing
//! over that stage. [`StagedNormalSampler`] models the two phases explicitly,
//! with a clear ownership handoff of the stage between them, rather than
//! interleaving draw and transform per pair.
//!
//! The stage capacity is fixed at initialisation and the stage is never
//! resized; a batch request larger than the stage is a programming error.
//!
//! # Policy interaction
//!
//! - Trigonometric policy (default): the transform consumes exactly one
//!   staged pair per output pair, so phase two is a `rayon` data-parallel
//!   kernel over disjoint pair chunks; the staged uniforms are read-only.
//! - Polar policy (`polar-gaussian`): the rejection loop may consume more
//!   pairs than it accepts, so phase two walks the stage with a cursor and
//!   re-runs the bulk fill whenever the stage drains. A rejected pair is
//!   never retried in place; fresh uniforms are always consumed.

use crate::boxmuller;
use crate::engine::DeviateEngine;
use crate::error::EngineError;

/// Batch sampler that stages uniforms in bulk, then transforms them in a
/// separate pass.
///
/// Owns its engine and a fixed-capacity scratch stage allocated once at
/// construction. Dropping the sampler releases both.
///
/// # Examples
///
/// ```rust
/// use scatter_rng::{LcgEngine, StagedNormalSampler};
///
/// let mut stage = StagedNormalSampler::<LcgEngine>::new(42, 4096).unwrap();
/// let mut kicks = vec![0.0; 1000];
/// stage.fill_normal(&mut kicks);
/// ```
#[derive(Debug)]
pub struct StagedNormalSampler<E: DeviateEngine> {
    engine: E,
    /// Scratch stage of uniforms; length fixed at construction, always a
    /// whole number of pairs.
    scratch: Vec<f64>,
}

impl<E: DeviateEngine> StagedNormalSampler<E> {
    /// Creates a sampler with a stage able to hold `capacity` deviates.
    ///
    /// The capacity is rounded up to a whole number of pairs and is fixed for
    /// the sampler's lifetime.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the owned engine
    /// * `capacity` - Maximum batch size in deviates; must be at least 2
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCapacity`] if the stage cannot hold a
    /// single pair.
    pub fn new(seed: u64, capacity: usize) -> Result<Self, EngineError> {
        if capacity < 2 {
            return Err(EngineError::InvalidCapacity { capacity });
        }
        let capacity = capacity + (capacity & 1);
        tracing::debug!(seed, capacity, "allocated staged deviate buffer");
        Ok(Self {
            engine: E::from_seed(seed),
            scratch: vec![0.0; capacity],
        })
    }

    /// Returns the stage capacity in deviates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.scratch.len()
    }

    /// Fills `out` with uniform deviates through the engine's bulk path.
    ///
    /// # Panics
    ///
    /// Panics if the request exceeds the fixed stage capacity.
    pub fn fill_uniform(&mut self, out: &mut [f64]) {
        assert!(
            out.len() <= self.scratch.len(),
            "batch of {} exceeds fixed stage capacity {}",
            out.len(),
            self.scratch.len()
        );
        self.engine.fill_uniform(out);
    }

    /// Fills `out` with standard-normal deviates in two phases: bulk uniform
    /// generation into the stage, then the pairing transform.
    ///
    /// An empty request is a no-op. For odd lengths the final pair's second
    /// deviate is computed and discarded, never written past the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the request exceeds the fixed stage capacity.
    pub fn fill_normal(&mut self, out: &mut [f64]) {
        if out.is_empty() {
            return;
        }
        assert!(
            out.len() <= self.scratch.len(),
            "batch of {} exceeds fixed stage capacity {}",
            out.len(),
            self.scratch.len()
        );

        // Phase one: a single bulk call stages a whole number of pairs.
        let staged = out.len() + (out.len() & 1);
        self.engine.fill_uniform(&mut self.scratch[..staged]);

        // Phase two: pairing transform over the staged uniforms.
        self.transform(staged, out);
    }

    #[cfg(not(feature = "polar-gaussian"))]
    fn transform(&mut self, staged: usize, out: &mut [f64]) {
        use rayon::prelude::*;

        let uniforms = &self.scratch[..staged];
        out.par_chunks_mut(2)
            .zip(uniforms.par_chunks(2))
            .for_each(|(dst, src)| {
                let (z0, z1) = boxmuller::normal_pair_trig(src[0], src[1]);
                dst[0] = z0;
                if dst.len() == 2 {
                    dst[1] = z1;
                }
            });
    }

    #[cfg(feature = "polar-gaussian")]
    fn transform(&mut self, staged: usize, out: &mut [f64]) {
        let Self { engine, scratch } = self;
        let mut cursor = 0usize;
        let mut filled = staged;
        boxmuller::fill_normal_polar(
            || {
                if cursor >= filled {
                    // Rejections drained the stage; re-run the bulk fill.
                    engine.fill_uniform(scratch);
                    cursor = 0;
                    filled = scratch.len();
                }
                let x = scratch[cursor];
                cursor += 1;
                x
            },
            out,
        );
    }
}
