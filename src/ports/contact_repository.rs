//! Contact repository port.
//!
//! `create` is the atomicity boundary of the routing sequence: contact
//! insert and operator load increment execute in one storage transaction so
//! a failure between them cannot leave load accounting out of sync with
//! actual assignments.

use async_trait::async_trait;

use crate::domain::contact::{Contact, NewContact};
use crate::domain::foundation::{ContactId, DomainError, LeadId, OperatorId};

/// Repository port for contact persistence.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find a contact by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError>;

    /// List all contacts of a lead, oldest first.
    async fn list_by_lead(&self, lead_id: LeadId) -> Result<Vec<Contact>, DomainError>;

    /// List contacts assigned to an operator, optionally filtered by
    /// resolution status.
    async fn list_by_operator(
        &self,
        operator_id: OperatorId,
        resolved: Option<bool>,
    ) -> Result<Vec<Contact>, DomainError>;

    /// Insert a contact and, when an operator is assigned, increment that
    /// operator's load in the same transaction.
    ///
    /// The increment is conditional (`current_load < max_load`). When the
    /// operator reached capacity between the eligibility snapshot and this
    /// call, the whole transaction rolls back and the error carries
    /// `OperatorAtCapacity`, so the caller can re-select against a fresh
    /// snapshot.
    async fn create(&self, contact: NewContact) -> Result<Contact, DomainError>;

    /// Mark a contact resolved.
    ///
    /// The transition happens exactly once: a second call fails with
    /// `AlreadyResolved`, and a missing contact with `ContactNotFound`.
    /// Load release for the assigned operator is the caller's concern, via
    /// `OperatorRepository::decrement_load`.
    async fn mark_resolved(&self, id: ContactId) -> Result<Contact, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ContactRepository) {}
    }
}
