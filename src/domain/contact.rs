//! Contact aggregate - one inbound client interaction event.
//!
//! A contact references the resolved lead, the source it arrived through,
//! and optionally the operator it was assigned to. The operator assignment
//! is immutable once the contact is created; `is_resolved` transitions
//! false to true exactly once.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContactId, LeadId, OperatorId, SourceId, Timestamp};

/// Contact aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    lead_id: LeadId,
    source_id: SourceId,
    operator_id: Option<OperatorId>,
    message: Option<String>,
    is_resolved: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Contact {
    /// Reconstitute a contact from persistence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ContactId,
        lead_id: LeadId,
        source_id: SourceId,
        operator_id: Option<OperatorId>,
        message: Option<String>,
        is_resolved: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            lead_id,
            source_id,
            operator_id,
            message,
            is_resolved,
            created_at,
            updated_at,
        }
    }

    /// Returns the contact ID.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Returns the lead this contact belongs to.
    pub fn lead_id(&self) -> LeadId {
        self.lead_id
    }

    /// Returns the source the contact arrived through.
    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    /// Returns the assigned operator; `None` means no eligible operator was
    /// available at assignment time (queued/unassigned, not a failure).
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.operator_id
    }

    /// Returns the message text, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the contact has been handled.
    pub fn is_resolved(&self) -> bool {
        self.is_resolved
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the last update time.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

/// Fields for inserting a new contact.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub lead_id: LeadId,
    pub source_id: SourceId,
    pub operator_id: Option<OperatorId>,
    pub message: Option<String>,
}
