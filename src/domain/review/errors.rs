//! Error types for the review domain.

use thiserror::Error;

/// Validation failures for an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The code field was absent or blank.
    #[error("No code provided")]
    MissingCode,
}

/// Returned when a string does not name a known agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent '{0}' (expected one of: bug, style, performance, security)")]
pub struct ParseAgentError(pub String);
