//! Matcher error types.

use thiserror::Error;

/// Errors from linearization and covariance estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The scan contains no points. Linearization and covariance are
    /// undefined over an empty point set.
    #[error("scan contains no points")]
    EmptyScan,

    /// The sigma-point likelihoods sum to approximately zero, so the
    /// weights cannot be normalized. The candidate pose has essentially
    /// no support in the map.
    #[error("sigma-point likelihoods sum to zero")]
    DegenerateLikelihoods,
}
