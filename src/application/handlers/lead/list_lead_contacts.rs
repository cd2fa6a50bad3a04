//! ListLeadContactsHandler - lists every contact of one lead.

use std::sync::Arc;

use crate::domain::contact::Contact;
use crate::domain::foundation::{DomainError, ErrorCode, LeadId};
use crate::ports::{ContactRepository, LeadRepository};

pub struct ListLeadContactsHandler {
    leads: Arc<dyn LeadRepository>,
    contacts: Arc<dyn ContactRepository>,
}

impl ListLeadContactsHandler {
    pub fn new(leads: Arc<dyn LeadRepository>, contacts: Arc<dyn ContactRepository>) -> Self {
        Self { leads, contacts }
    }

    pub async fn handle(&self, lead_id: LeadId) -> Result<Vec<Contact>, DomainError> {
        if self.leads.find_by_id(lead_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::LeadNotFound,
                format!("Lead not found: {}", lead_id),
            ));
        }
        self.contacts.list_by_lead(lead_id).await
    }
}
