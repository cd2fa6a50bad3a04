//! RouteContactHandler - the end-to-end contact-ingestion sequence.
//!
//! Validate source, resolve the lead, select an operator, persist the
//! contact, account the load. Validation failures surface before any
//! mutation; the contact insert and the load increment share one storage
//! transaction (see `ContactRepository::create`).

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::contact::{Contact, NewContact};
use crate::domain::foundation::{ErrorCode, OperatorId, SourceId};
use crate::domain::lead::LeadIdentifier;
use crate::domain::routing::{select_operator, RoutingError};
use crate::ports::{ContactRepository, LeadRepository, OperatorRepository, SourceRepository};

use super::LeadResolver;

/// How many times a lost capacity race triggers re-selection against a
/// fresh snapshot before the contact is persisted unassigned.
const MAX_ASSIGN_ATTEMPTS: u32 = 3;

/// Command to route one inbound contact.
#[derive(Debug, Clone)]
pub struct RouteContactCommand {
    pub source_id: SourceId,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Result of a successful routing decision.
///
/// An absent operator means "queued/unassigned", not a failure.
#[derive(Debug, Clone)]
pub struct RoutedContact {
    pub contact: Contact,
}

impl RoutedContact {
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.contact.operator_id()
    }
}

/// Orchestrates contact ingestion.
pub struct RouteContactHandler {
    sources: Arc<dyn SourceRepository>,
    operators: Arc<dyn OperatorRepository>,
    contacts: Arc<dyn ContactRepository>,
    resolver: LeadResolver,
}

impl RouteContactHandler {
    pub fn new(
        sources: Arc<dyn SourceRepository>,
        operators: Arc<dyn OperatorRepository>,
        contacts: Arc<dyn ContactRepository>,
        leads: Arc<dyn LeadRepository>,
    ) -> Self {
        Self {
            sources,
            operators,
            contacts,
            resolver: LeadResolver::new(leads),
        }
    }

    pub async fn handle(&self, cmd: RouteContactCommand) -> Result<RoutedContact, RoutingError> {
        // 1. The source must exist before anything is written.
        let source = self
            .sources
            .find_by_id(cmd.source_id)
            .await?
            .ok_or(RoutingError::SourceNotFound(cmd.source_id))?;

        // 2. At least one of phone/email, syntactically valid.
        let ident = LeadIdentifier::new(cmd.phone, cmd.email, cmd.name)?;

        // 3. Deduplicate across channels; may create a new lead.
        let lead = self.resolver.resolve(&ident).await?;

        // 4-6. Select, persist, account. A conditional increment inside the
        // contact-insert transaction makes capacity a hard invariant; losing
        // that race re-runs selection against a fresh snapshot.
        for attempt in 1..=MAX_ASSIGN_ATTEMPTS {
            let candidates = self.operators.candidates_for_source(source.id()).await?;
            let selected = {
                let mut rng = rand::thread_rng();
                select_operator(candidates, &mut rng)
            };

            let Some(operator_id) = selected else {
                break;
            };

            let new_contact = NewContact {
                lead_id: lead.id(),
                source_id: source.id(),
                operator_id: Some(operator_id),
                message: cmd.message.clone(),
            };

            match self.contacts.create(new_contact).await {
                Ok(contact) => {
                    info!(
                        contact = %contact.id(),
                        lead = %lead.id(),
                        source = %source.id(),
                        operator = %operator_id,
                        "contact routed"
                    );
                    return Ok(RoutedContact { contact });
                }
                Err(e) if e.code == ErrorCode::OperatorAtCapacity => {
                    warn!(
                        operator = %operator_id,
                        attempt,
                        "operator reached capacity after selection, re-selecting"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        let contact = self
            .contacts
            .create(NewContact {
                lead_id: lead.id(),
                source_id: source.id(),
                operator_id: None,
                message: cmd.message,
            })
            .await?;

        info!(
            contact = %contact.id(),
            lead = %lead.id(),
            source = %source.id(),
            "contact queued without operator"
        );
        Ok(RoutedContact { contact })
    }
}
