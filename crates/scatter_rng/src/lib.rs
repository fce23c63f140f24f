//! # Deviate Engine Layer for Monte Carlo Collision Operators
//!
//! This crate supplies uniform and standard-normal deviates to Monte Carlo
//! particle simulations (stochastic collision and scattering operators). The
//! design goals are:
//!
//! - **Throughput**: millions of deviates per second, consumed per-particle
//!   per-timestep, with zero-allocation batch operations via `&mut [f64]`
//!   slices.
//! - **Reproducibility**: the same seed always produces the same sequence for
//!   the seedable backends, enabling bit-reproducible simulation runs.
//! - **Independence**: one engine per worker; no state is shared between
//!   workers and no internal locking is performed.
//!
//! ## Backends
//!
//! Four interchangeable backends implement the [`DeviateEngine`] capability
//! set. The build-time selection is exported as the [`DefaultEngine`] alias;
//! calling code is written against the trait only, never against a concrete
//! backend.
//!
//! | Feature | Engine | Uniform source | Normal source |
//! |---|---|---|---|
//! | `backend-vector` | [`VectorEngine`] | block-bulk raw words | library Ziggurat, bulk |
//! | `backend-stats` | [`StatsEngine`] | library scalar draw | library Ziggurat, scalar |
//! | `backend-lcg` (default) | [`LcgEngine`] | 64-bit affine recurrence | Box–Muller transform |
//! | `backend-platform` | [`PlatformEngine`] | ambient thread-local stream | Box–Muller transform |
//!
//! Selecting zero or more than one backend is a compile-time error.
//!
//! ## Gaussian transform policy
//!
//! The backends that synthesise normals from uniforms use the Box–Muller
//! transform in [`boxmuller`]. The trigonometric form is the default; the
//! `polar-gaussian` feature switches to the polar (geometric) form. Both are
//! statistically valid and the choice is independent of the backend.
//!
//! ## Usage example
//!
//! ```rust
//! use scatter_rng::{DefaultEngine, DeviateEngine};
//!
//! // One engine per worker, seeded for reproducibility
//! let mut rng = DefaultEngine::from_seed(42);
//!
//! // Scalar draws
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//! let _z = rng.gen_normal();
//!
//! // Batch draws into a caller-owned buffer (zero allocation)
//! let mut buffer = vec![0.0; 1024];
//! rng.fill_uniform(&mut buffer);
//! rng.fill_normal(&mut buffer);
//! ```
//!
//! ## Staged batch path
//!
//! [`StagedNormalSampler`] decouples uniform generation and the Gaussian
//! transform into two explicit phases over a fixed-capacity scratch stage,
//! matching bulk-generation execution granularity:
//!
//! ```rust
//! use scatter_rng::{LcgEngine, StagedNormalSampler};
//!
//! let mut stage = StagedNormalSampler::<LcgEngine>::new(42, 4096).unwrap();
//! let mut out = vec![0.0; 101];
//! stage.fill_normal(&mut out);
//! ```
//!
//! ## Concurrency contract
//!
//! An engine is owned exclusively by one worker for its lifetime; two engines
//! must never be mutated from more than one thread. The platform backend is
//! the sole partial exception: it draws from a thread-local ambient stream,
//! so concurrent workers each see an isolated but non-reproducible sequence.

pub mod boxmuller;
pub mod engine;
pub mod error;
pub mod staged;

pub use engine::{DeviateEngine, LcgEngine, PlatformEngine, StatsEngine, VectorEngine};
pub use error::EngineError;
pub use staged::StagedNormalSampler;

#[cfg(any(
    feature = "backend-vector",
    feature = "backend-stats",
    feature = "backend-lcg",
    feature = "backend-platform"
))]
pub use engine::DefaultEngine;
