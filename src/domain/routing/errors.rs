//! Routing-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SourceId};

/// Errors surfaced by the routing orchestrator.
///
/// "No eligible operator" is deliberately absent: an unassigned contact is a
/// first-class outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// Referenced source does not exist. No side effects were performed.
    SourceNotFound(SourceId),
    /// Neither phone nor email was supplied. No side effects were performed.
    InvalidIdentifier(String),
    /// Supplied identifier or message failed validation.
    ValidationFailed(String),
    /// A persistence-layer fault. Not retried by the engine; retry policy
    /// belongs to the caller.
    Storage(String),
}

impl RoutingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RoutingError::SourceNotFound(_) => ErrorCode::SourceNotFound,
            RoutingError::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
            RoutingError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            RoutingError::Storage(_) => ErrorCode::DatabaseError,
        }
    }
}

impl std::fmt::Display for RoutingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutingError::SourceNotFound(id) => write!(f, "Source not found: {}", id),
            RoutingError::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
            RoutingError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
            RoutingError::Storage(msg) => write!(f, "Storage failure: {}", msg),
        }
    }
}

impl std::error::Error for RoutingError {}

impl From<DomainError> for RoutingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidIdentifier => RoutingError::InvalidIdentifier(err.message),
            ErrorCode::ValidationFailed => RoutingError::ValidationFailed(err.message),
            _ => RoutingError::Storage(err.to_string()),
        }
    }
}
