//! Error types raised while validating scoring configuration.

use thiserror::Error;

/// Errors returned by [`ScoringConfig::validate`](crate::ScoringConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringConfigError {
    /// The per-dimension weights do not add up to a full score.
    #[error("dimension weights must sum to 100, found {total}")]
    WeightSum {
        /// Sum of the configured weights.
        total: u32,
    },
    /// The strength tolerance band was zero.
    #[error("strength tolerance band must be at least 1")]
    ZeroToleranceBand,
    /// The result cap was zero.
    #[error("result cap must be at least 1")]
    ZeroResultCap,
}
