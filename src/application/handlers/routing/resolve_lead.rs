//! LeadResolver - maps a (phone, email) pair to exactly one lead.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::DomainError;
use crate::domain::lead::{Lead, LeadIdentifier, NewLead};
use crate::ports::LeadRepository;

/// Resolves inbound identifiers to a single lead record, creating one when
/// none matches.
///
/// Resolution is idempotent: two calls with the same identifier yield the
/// same lead id, and concurrent duplication is absorbed by the repository's
/// conflict handling.
pub struct LeadResolver {
    leads: Arc<dyn LeadRepository>,
}

impl LeadResolver {
    pub fn new(leads: Arc<dyn LeadRepository>) -> Self {
        Self { leads }
    }

    /// Find the lead matching the identifier, or create one.
    ///
    /// Lookup order is phone first, then email. When phone and email match
    /// two *different* existing leads the phone match wins deterministically;
    /// the records are never merged. A found lead gets its name replaced when
    /// a differing non-empty name was supplied (last-write-wins).
    pub async fn resolve(&self, ident: &LeadIdentifier) -> Result<Lead, DomainError> {
        let by_phone = match ident.phone() {
            Some(phone) => self.leads.find_by_phone(phone).await?,
            None => None,
        };
        let by_email = match ident.email() {
            Some(email) => self.leads.find_by_email(email).await?,
            None => None,
        };

        if let (Some(p), Some(e)) = (&by_phone, &by_email) {
            if p.id() != e.id() {
                warn!(
                    phone_lead = %p.id(),
                    email_lead = %e.id(),
                    "ambiguous identity: phone and email match different leads, preferring phone"
                );
            }
        }

        let existing = by_phone.or(by_email);

        match existing {
            Some(mut lead) => {
                if let Some(name) = ident.name() {
                    if lead.name() != Some(name) {
                        self.leads.update_name(lead.id(), name).await?;
                        lead.rename(name.to_string());
                    }
                }
                Ok(lead)
            }
            None => self.leads.create(NewLead::from(ident)).await,
        }
    }
}
