//! Error type shared by the simulator crates.
//!
//! Sub-crates define their own error enums and convert `SirError` into them
//! via `From` impls.

use thiserror::Error;

/// The top-level error type for `sir-core`.
#[derive(Debug, Error)]
pub enum SirError {
    /// A configuration value violates its constraint.  Raised before any
    /// agent is created; never retried.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameters {
        field:  &'static str,
        reason: String,
    },
}

impl SirError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SirError::InvalidParameters { field, reason: reason.into() }
    }
}

/// Shorthand result type for the `sir-*` crates.
pub type SirResult<T> = Result<T, SirError>;
