//! Request/response bodies for contact endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::contact::Contact;
use crate::domain::foundation::Timestamp;

/// Body of `POST /api/v1/contacts`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub source_id: i64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Contact representation returned by every contact endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub lead_id: i64,
    pub source_id: i64,
    pub operator_id: Option<i64>,
    pub message: Option<String>,
    pub is_resolved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id().as_i64(),
            lead_id: contact.lead_id().as_i64(),
            source_id: contact.source_id().as_i64(),
            operator_id: contact.operator_id().map(|id| id.as_i64()),
            message: contact.message().map(String::from),
            is_resolved: contact.is_resolved(),
            created_at: contact.created_at(),
            updated_at: contact.updated_at(),
        }
    }
}
