//! Block-bulk deviate engine over a throughput-oriented generator.
//!
//! This backend targets the batch paths: uniforms are produced by bulk-filling
//! blocks of raw 64-bit words in a single generator call per block, followed
//! by a branch-free conversion pass that the optimiser can vectorise. Normals
//! come from the statistics library's own Ziggurat transform, streamed in
//! bulk. Scalar draws fall back to single-word generation with the same
//! output mapping, so scalar and batch draws share one distribution family.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use super::DeviateEngine;

/// Words generated per bulk call; sized to keep the scratch block in L1.
const BLOCK: usize = 64;

/// Maps a raw 64-bit word to [0, 1) using the upper 53 bits, matching the
/// double-precision mantissa width.
#[inline]
fn to_unit_interval(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Bulk-generation deviate engine.
///
/// # Reproducibility
///
/// Seed-reproducible: the same seed produces the same sequence of generator
/// words. Scalar and batch uniform draws consume the word stream identically,
/// so they are interchangeable per draw count.
///
/// # Examples
///
/// ```rust
/// use scatter_rng::{DeviateEngine, VectorEngine};
///
/// let mut rng = VectorEngine::from_seed(42);
/// let mut buffer = vec![0.0; 10_000];
/// rng.fill_uniform(&mut buffer);
/// assert!(buffer.iter().all(|u| (0.0..1.0).contains(u)));
/// ```
#[derive(Clone, Debug)]
pub struct VectorEngine {
    inner: SmallRng,
    seed: u64,
}

impl VectorEngine {
    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DeviateEngine for VectorEngine {
    fn from_seed(seed: u64) -> Self {
        tracing::debug!(seed, "seeded block-bulk deviate engine");
        Self {
            inner: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    #[inline]
    fn gen_uniform(&mut self) -> f64 {
        to_unit_interval(self.inner.gen::<u64>())
    }

    #[inline]
    fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        let mut raw = [0u64; BLOCK];
        for chunk in buffer.chunks_mut(BLOCK) {
            let len = chunk.len();
            // One bulk generator call per block, then a vectorisable
            // conversion pass over the block.
            self.inner.fill(&mut raw[..len]);
            for (slot, &bits) in chunk.iter_mut().zip(raw[..len].iter()) {
                *slot = to_unit_interval(bits);
            }
        }
    }

    fn fill_normal(&mut self, buffer: &mut [f64]) {
        for (slot, z) in buffer
            .iter_mut()
            .zip((&mut self.inner).sample_iter(StandardNormal))
        {
            *slot = z;
        }
    }
}
