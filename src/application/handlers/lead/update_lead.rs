//! UpdateLeadHandler - partial update of lead attributes (management
//! surface; the routing path only ever touches the name).

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, LeadId};
use crate::domain::lead::{Lead, LeadUpdate};
use crate::ports::LeadRepository;

/// Command to update a lead; absent fields stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateLeadCommand {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

pub struct UpdateLeadHandler {
    leads: Arc<dyn LeadRepository>,
}

impl UpdateLeadHandler {
    pub fn new(leads: Arc<dyn LeadRepository>) -> Self {
        Self { leads }
    }

    pub async fn handle(&self, id: LeadId, cmd: UpdateLeadCommand) -> Result<Lead, DomainError> {
        let update = LeadUpdate {
            phone: cmd.phone,
            email: cmd.email,
            name: cmd.name,
        };
        update.validate()?;
        self.leads
            .update(id, update)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::LeadNotFound, format!("Lead not found: {}", id)))
    }
}
