//! Deviate engine abstraction and backend selection.
//!
//! This module defines [`DeviateEngine`], the capability set every backend
//! implements, and performs the build-time backend selection. The selected
//! backend is exported as the [`DefaultEngine`] type alias so the choice is
//! invisible to calling code: callers are written against the trait only and
//! pay no runtime dispatch cost.
//!
//! ## Design rationale
//!
//! - **Static dispatch only**: no `Box<dyn DeviateEngine>` in hot paths; the
//!   backend is fixed at build time and the alias compiles to a concrete type.
//! - **One engine per worker**: engines perform no internal locking and must
//!   be owned exclusively by a single thread for their lifetime.
//! - **RAII teardown**: engines release their state when dropped; ownership
//!   makes releasing an engine twice unrepresentable.
//!
//! ## Module structure
//!
//! - [`lcg`]: self-contained 64-bit linear-congruential engine (portable,
//!   no external generator)
//! - [`vector`]: block-bulk engine over a throughput-oriented generator
//! - [`stats`]: scalar engine over the statistics library's seedable
//!   generator, the reference for statistical quality
//! - [`platform`]: fallback over the ambient thread-local stream

pub mod lcg;
pub mod platform;
pub mod stats;
pub mod vector;

pub use lcg::LcgEngine;
pub use platform::PlatformEngine;
pub use stats::StatsEngine;
pub use vector::VectorEngine;

#[cfg(test)]
mod tests;

/// Capability set shared by every deviate engine backend.
///
/// One instance serves one logical worker (thread, vector lane or bulk
/// execution context). An engine, once seeded, produces a deterministic
/// sequence fully determined by its seed and the calls made to it, except for
/// [`PlatformEngine`] whose limitation is documented on the type itself.
///
/// # Contract
///
/// - `gen_uniform` returns values in [0, 1).
/// - `gen_normal` returns standard-normal deviates (mean 0, variance 1).
/// - The fill operations produce the same marginal distribution as the
///   corresponding scalar call repeated once per slot, though not necessarily
///   the same bit pattern; an empty buffer is a no-op.
///
/// # Examples
///
/// ```rust
/// use scatter_rng::{DeviateEngine, LcgEngine};
///
/// fn scatter_kick(rng: &mut impl DeviateEngine, kicks: &mut [f64]) {
///     rng.fill_normal(kicks);
/// }
///
/// let mut rng = LcgEngine::from_seed(7);
/// let mut kicks = vec![0.0; 256];
/// scatter_kick(&mut rng, &mut kicks);
/// ```
pub trait DeviateEngine {
    /// Creates an engine seeded for a single worker.
    ///
    /// The same seed produces the same subsequent sequence for every
    /// seed-reproducible backend.
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    /// Returns one uniform deviate in [0, 1).
    fn gen_uniform(&mut self) -> f64;

    /// Returns one standard-normal deviate.
    fn gen_normal(&mut self) -> f64;

    /// Fills a caller-owned buffer with uniform deviates in [0, 1).
    fn fill_uniform(&mut self, buffer: &mut [f64]);

    /// Fills a caller-owned buffer with standard-normal deviates.
    fn fill_normal(&mut self, buffer: &mut [f64]);
}

#[cfg(not(any(
    feature = "backend-vector",
    feature = "backend-stats",
    feature = "backend-lcg",
    feature = "backend-platform"
)))]
compile_error!(
    "no deviate engine backend selected: enable exactly one of `backend-vector`, \
     `backend-stats`, `backend-lcg` or `backend-platform`"
);

#[cfg(all(feature = "backend-vector", feature = "backend-stats"))]
compile_error!("backend features are mutually exclusive: `backend-vector` and `backend-stats`");
#[cfg(all(feature = "backend-vector", feature = "backend-lcg"))]
compile_error!("backend features are mutually exclusive: `backend-vector` and `backend-lcg`");
#[cfg(all(feature = "backend-vector", feature = "backend-platform"))]
compile_error!("backend features are mutually exclusive: `backend-vector` and `backend-platform`");
#[cfg(all(feature = "backend-stats", feature = "backend-lcg"))]
compile_error!("backend features are mutually exclusive: `backend-stats` and `backend-lcg`");
#[cfg(all(feature = "backend-stats", feature = "backend-platform"))]
compile_error!("backend features are mutually exclusive: `backend-stats` and `backend-platform`");
#[cfg(all(feature = "backend-lcg", feature = "backend-platform"))]
compile_error!("backend features are mutually exclusive: `backend-lcg` and `backend-platform`");

/// The backend selected at build time.
#[cfg(all(
    feature = "backend-vector",
    not(any(
        feature = "backend-stats",
        feature = "backend-lcg",
        feature = "backend-platform"
    ))
))]
pub type DefaultEngine = VectorEngine;

/// The backend selected at build time.
#[cfg(all(
    feature = "backend-stats",
    not(any(
        feature = "backend-vector",
        feature = "backend-lcg",
        feature = "backend-platform"
    ))
))]
pub type DefaultEngine = StatsEngine;

/// The backend selected at build time.
#[cfg(all(
    feature = "backend-lcg",
    not(any(
        feature = "backend-vector",
        feature = "backend-stats",
        feature = "backend-platform"
    ))
))]
pub type DefaultEngine = LcgEngine;

/// The backend selected at build time.
#[cfg(all(
    feature = "backend-platform",
    not(any(
        feature = "backend-vector",
        feature = "backend-stats",
        feature = "backend-lcg"
    ))
))]
pub type DefaultEngine = PlatformEngine;
