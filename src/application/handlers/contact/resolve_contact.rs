//! ResolveContactHandler - marks a contact handled and releases the
//! assigned operator's load slot.

use std::sync::Arc;

use tracing::info;

use crate::domain::contact::Contact;
use crate::domain::foundation::{ContactId, DomainError};
use crate::ports::{ContactRepository, OperatorRepository};

/// Resolves a contact.
///
/// The resolved flag flips exactly once (`AlreadyResolved` on repeats), so
/// the decrement runs at most once per contact. The decrement is the load
/// accountant's delta update; unassigned contacts release nothing.
pub struct ResolveContactHandler {
    contacts: Arc<dyn ContactRepository>,
    operators: Arc<dyn OperatorRepository>,
}

impl ResolveContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>, operators: Arc<dyn OperatorRepository>) -> Self {
        Self { contacts, operators }
    }

    pub async fn handle(&self, id: ContactId) -> Result<Contact, DomainError> {
        let contact = self.contacts.mark_resolved(id).await?;

        if let Some(operator_id) = contact.operator_id() {
            self.operators.decrement_load(operator_id).await?;
            info!(contact = %id, operator = %operator_id, "contact resolved, load released");
        } else {
            info!(contact = %id, "unassigned contact resolved");
        }

        Ok(contact)
    }
}
