//! Request/response bodies for lead endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::lead::Lead;

/// Body of `PATCH /api/v1/leads/:id`; absent fields stay unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadRequest {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Lead representation returned by lead endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct LeadResponse {
    pub id: i64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id().as_i64(),
            phone: lead.phone().map(String::from),
            email: lead.email().map(String::from),
            name: lead.name().map(String::from),
            created_at: lead.created_at(),
            updated_at: lead.updated_at(),
        }
    }
}
