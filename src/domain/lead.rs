//! Lead aggregate - deduplicated client identity.
//!
//! One client may reach out through several channels (bots, messengers,
//! email), but the system tracks a single lead record per person, keyed by
//! phone and/or email.
//!
//! # Known limitation
//!
//! When the phone of an inbound contact matches one existing lead and the
//! email matches a different one, the resolver deterministically prefers the
//! phone match; records are never merged.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, LeadId, Timestamp};

/// Maximum length for a phone number.
pub const MAX_PHONE_LENGTH: usize = 20;
/// Maximum length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 255;
/// Maximum length for a lead name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Lead aggregate - one real person reachable via one or more channels.
///
/// # Invariants
///
/// - At most one lead exists per distinct phone value and per distinct
///   email value (enforced by unique indexes).
/// - At least one of `phone` / `email` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    id: LeadId,
    phone: Option<String>,
    email: Option<String>,
    name: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Lead {
    /// Reconstitute a lead from persistence (no validation).
    pub fn reconstitute(
        id: LeadId,
        phone: Option<String>,
        email: Option<String>,
        name: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            phone,
            email,
            name,
            created_at,
            updated_at,
        }
    }

    /// Returns the lead ID.
    pub fn id(&self) -> LeadId {
        self.id
    }

    /// Returns the phone, if known.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the email, if known.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the display name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the last update time.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Replace the stored name (last-write-wins, no conflict detection).
    pub fn rename(&mut self, name: String) {
        self.name = Some(name);
        self.updated_at = Timestamp::now();
    }
}

/// Validated identifier bundle supplied by an inbound contact.
///
/// Carries the phone/email used for deduplication plus the optional display
/// name. Construction fails unless at least one identifier is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadIdentifier {
    phone: Option<String>,
    email: Option<String>,
    name: Option<String>,
}

impl LeadIdentifier {
    /// Builds an identifier from raw request input.
    ///
    /// Empty strings are treated as absent. Fails with `InvalidIdentifier`
    /// when neither phone nor email remains, and with `ValidationFailed`
    /// when a present field is malformed or too long.
    pub fn new(
        phone: Option<String>,
        email: Option<String>,
        name: Option<String>,
    ) -> Result<Self, DomainError> {
        let phone = normalize(phone);
        let email = normalize(email);
        let name = normalize(name);

        if phone.is_none() && email.is_none() {
            return Err(DomainError::new(
                ErrorCode::InvalidIdentifier,
                "Either phone or email must be provided",
            ));
        }

        if let Some(p) = &phone {
            validate_phone(p)?;
        }
        if let Some(e) = &email {
            validate_email(e)?;
        }
        if let Some(n) = &name {
            validate_display_name(n)?;
        }

        Ok(Self { phone, email, name })
    }

    /// Returns the phone, if supplied.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the email, if supplied.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the display name, if supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Fields for inserting a new lead.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl From<&LeadIdentifier> for NewLead {
    fn from(ident: &LeadIdentifier) -> Self {
        Self {
            phone: ident.phone.clone(),
            email: ident.email.clone(),
            name: ident.name.clone(),
        }
    }
}

/// Partial update of lead attributes (management surface).
#[derive(Debug, Clone, Default)]
pub struct LeadUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl LeadUpdate {
    /// Validates whichever fields are present.
    ///
    /// Same rules as `LeadIdentifier::new`; phone and email feed the dedup
    /// lookups, so a malformed value stored here would break matching.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(name) = &self.name {
            validate_display_name(name)?;
        }
        Ok(())
    }
}

fn validate_phone(phone: &str) -> Result<(), DomainError> {
    if phone.len() > MAX_PHONE_LENGTH {
        return Err(DomainError::validation("phone", "too long"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(DomainError::validation("email", "too long"));
    }
    if !is_valid_email(email) {
        return Err(DomainError::validation("email", "invalid address"));
    }
    Ok(())
}

fn validate_display_name(name: &str) -> Result<(), DomainError> {
    if name.len() > MAX_NAME_LENGTH {
        return Err(DomainError::validation("name", "too long"));
    }
    Ok(())
}

fn normalize(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Minimal syntactic email check: one '@', non-empty local part, and a
/// domain containing a dot with non-empty labels around it.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
