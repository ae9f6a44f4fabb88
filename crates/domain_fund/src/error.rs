//! Fund domain errors

use thiserror::Error;

/// Errors that can occur in the fund domain
///
/// Absence of a fund is never an error: lookups return `Option`. The only
/// failure mode at this layer is an opaque store fault, which propagates
/// unrecovered to the caller.
#[derive(Debug, Error)]
pub enum FundError {
    /// The backing store failed to open a connection or execute a statement
    #[error("Store error: {0}")]
    Store(String),
}

impl FundError {
    /// Creates a store fault from any displayable cause
    pub fn store(cause: impl std::fmt::Display) -> Self {
        FundError::Store(cause.to_string())
    }
}
