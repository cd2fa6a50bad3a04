//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects, and error types that form the
//! vocabulary of the contact routing domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{ContactId, LeadId, OperatorId, SourceId};
pub use timestamp::Timestamp;
