//! Lead repository port.
//!
//! The identity resolver is the only routing-path mutator of leads; the
//! management surface additionally uses `update`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LeadId};
use crate::domain::lead::{Lead, LeadUpdate, NewLead};

/// Repository port for lead persistence.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Find a lead by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError>;

    /// Find a lead by exact phone match.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Lead>, DomainError>;

    /// Find a lead by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<Lead>, DomainError>;

    /// Insert a new lead.
    ///
    /// Must be idempotent under concurrent duplication: when another request
    /// races in the same phone/email first, implementations return the
    /// already-existing record instead of failing or duplicating.
    async fn create(&self, lead: NewLead) -> Result<Lead, DomainError>;

    /// Replace the stored name (last-write-wins).
    async fn update_name(&self, id: LeadId, name: &str) -> Result<(), DomainError>;

    /// Partial update of lead attributes (management surface).
    ///
    /// Returns `None` if the lead does not exist.
    async fn update(&self, id: LeadId, update: LeadUpdate) -> Result<Option<Lead>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn LeadRepository) {}
    }
}
