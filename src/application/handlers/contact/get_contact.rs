//! GetContactHandler - fetches one contact by id.

use std::sync::Arc;

use crate::domain::contact::Contact;
use crate::domain::foundation::{ContactId, DomainError, ErrorCode};
use crate::ports::ContactRepository;

pub struct GetContactHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl GetContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(&self, id: ContactId) -> Result<Contact, DomainError> {
        self.contacts.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ContactNotFound,
                format!("Contact not found: {}", id),
            )
        })
    }
}
