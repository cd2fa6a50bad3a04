//! Operator repository port.
//!
//! Carries both the management surface and the load accountant contract.
//! `increment_load` / `decrement_load` are the only sanctioned mutators of
//! `current_load` outside the contact-insert transaction; implementations
//! must express them as storage-side delta updates
//! (`SET current_load = current_load + delta`), never as application-level
//! read-modify-write.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OperatorId, SourceId};
use crate::domain::operator::{NewOperator, Operator, OperatorUpdate};
use crate::domain::routing::Candidate;

/// Repository port for operator persistence and load accounting.
#[async_trait]
pub trait OperatorRepository: Send + Sync {
    /// Find an operator by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: OperatorId) -> Result<Option<Operator>, DomainError>;

    /// List all operators.
    async fn list(&self) -> Result<Vec<Operator>, DomainError>;

    /// Fetch the (operator, weight) snapshot configured for a source.
    ///
    /// Inactive operators are filtered at the storage layer; the selector
    /// re-checks eligibility against the snapshot it receives.
    async fn candidates_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<Candidate>, DomainError>;

    /// Insert a new operator with `current_load = 0`.
    async fn create(&self, operator: NewOperator) -> Result<Operator, DomainError>;

    /// Partial update of operator attributes. Returns `None` if missing.
    async fn update(
        &self,
        id: OperatorId,
        update: OperatorUpdate,
    ) -> Result<Option<Operator>, DomainError>;

    /// Delete an operator. Returns `false` if it did not exist.
    async fn delete(&self, id: OperatorId) -> Result<bool, DomainError>;

    /// Atomically add one to `current_load`.
    ///
    /// No ceiling is enforced here; callers stay behind the selector's
    /// eligibility gate or use the conditional increment inside
    /// `ContactRepository::create`.
    async fn increment_load(&self, id: OperatorId) -> Result<(), DomainError>;

    /// Atomically subtract one from `current_load`.
    ///
    /// No floor is enforced; callers must not decrement below zero.
    async fn decrement_load(&self, id: OperatorId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn OperatorRepository) {}
    }
}
