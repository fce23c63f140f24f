//! Error types for the deviate engine layer.
//!
//! Every sampling operation here is a deterministic, non-blocking local
//! computation, so the only recoverable failures are construction-time
//! validation errors. Misuse of a constructed sampler (oversized batch
//! requests) is a programming error and panics instead.

use thiserror::Error;

/// Errors raised while constructing sampling components.
///
/// # Examples
///
/// ```rust
/// use scatter_rng::{EngineError, LcgEngine, StagedNormalSampler};
///
/// let err = StagedNormalSampler::<LcgEngine>::new(42, 0).unwrap_err();
/// assert_eq!(err, EngineError::InvalidCapacity { capacity: 0 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Stage capacity cannot hold a single pair of deviates.
    #[error("invalid stage capacity {capacity}: the staged sampler needs room for at least one pair of deviates")]
    InvalidCapacity {
        /// Requested capacity in deviates.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidCapacity { capacity: 1 };
        assert!(err.to_string().contains("invalid stage capacity 1"));
    }
}
