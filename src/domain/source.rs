//! Source aggregate - a channel through which contacts arrive, plus the
//! per-source operator weight association.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, OperatorId, SourceId, Timestamp};

/// Maximum length for a source name.
pub const MAX_NAME_LENGTH: usize = 100;
/// Maximum length for a source description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
/// Default weight assigned when none is specified.
pub const DEFAULT_WEIGHT: i32 = 10;
/// Upper bound for a weight by configuration convention.
pub const MAX_WEIGHT: i32 = 100;

/// Source aggregate (e.g. "Telegram Bot", "WhatsApp").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    id: SourceId,
    name: String,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Source {
    /// Reconstitute a source from persistence (no validation).
    pub fn reconstitute(
        id: SourceId,
        name: String,
        description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
            updated_at,
        }
    }

    /// Returns the source ID.
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Returns the unique source name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the last update time.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

/// Fields for creating a new source.
#[derive(Debug, Clone)]
pub struct NewSource {
    pub name: String,
    pub description: Option<String>,
}

impl NewSource {
    /// Validates name and description lengths.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        if let Some(d) = &self.description {
            validate_description(d)?;
        }
        Ok(())
    }
}

/// Partial update of source attributes.
#[derive(Debug, Clone, Default)]
pub struct SourceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl SourceUpdate {
    /// Validates whichever fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(d) = &self.description {
            validate_description(d)?;
        }
        Ok(())
    }
}

/// Relative assignment priority of one operator for one source.
///
/// # Invariants
///
/// - At most one row per (source, operator) pair; setting a weight for an
///   existing pair overwrites it.
/// - `weight >= 1` (1-100 by configuration convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceOperatorWeight {
    pub source_id: SourceId,
    pub operator_id: OperatorId,
    pub weight: i32,
}

impl SourceOperatorWeight {
    /// Validates the weight bounds.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.weight < 1 || self.weight > MAX_WEIGHT {
            return Err(DomainError::validation(
                "weight",
                format!("must be between 1 and {}", MAX_WEIGHT),
            ));
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name", "cannot be empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(DomainError::validation("name", "too long"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), DomainError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::validation("description", "too long"));
    }
    Ok(())
}
