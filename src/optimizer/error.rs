use thiserror::Error;

/// Failure classes of the dispatch pipeline.
///
/// Nothing is recovered internally by substituting defaults; every failure
/// propagates with enough context to diagnose without re-running.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Malformed storage parameters, caught before any solve attempt.
    #[error("invalid storage parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Unusable price input (empty series, non-finite value).
    #[error("invalid price input: {0}")]
    InvalidInput(String),

    /// The solver failed or reported a non-optimal status.
    #[error("solver failure: {0}")]
    Solver(String),

    /// Solved values do not line up with the built model. Programming
    /// defect class, not a runtime condition.
    #[error("result extraction mismatch: {0}")]
    Extraction(String),
}

impl DispatchError {
    pub(crate) fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
