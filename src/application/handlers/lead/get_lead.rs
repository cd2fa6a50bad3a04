//! GetLeadHandler - fetches one lead by id.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, LeadId};
use crate::domain::lead::Lead;
use crate::ports::LeadRepository;

pub struct GetLeadHandler {
    leads: Arc<dyn LeadRepository>,
}

impl GetLeadHandler {
    pub fn new(leads: Arc<dyn LeadRepository>) -> Self {
        Self { leads }
    }

    pub async fn handle(&self, id: LeadId) -> Result<Lead, DomainError> {
        self.leads
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::LeadNotFound, format!("Lead not found: {}", id)))
    }
}
