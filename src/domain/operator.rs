//! Operator aggregate - a support agent with bounded concurrent load.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, OperatorId, Timestamp};

/// Maximum length for an operator name.
pub const MAX_NAME_LENGTH: usize = 100;
/// Upper bound for `max_load` by configuration convention.
pub const MAX_LOAD_CEILING: i32 = 100;

/// Operator aggregate.
///
/// # Invariants
///
/// - `max_load` is positive.
/// - `current_load` is non-negative and, as observed by the selector at
///   decision time, never exceeds `max_load`. The counter itself is mutated
///   only through the storage layer's atomic delta updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    id: OperatorId,
    name: String,
    is_active: bool,
    max_load: i32,
    current_load: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Operator {
    /// Reconstitute an operator from persistence (no validation).
    pub fn reconstitute(
        id: OperatorId,
        name: String,
        is_active: bool,
        max_load: i32,
        current_load: i32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            is_active,
            max_load,
            current_load,
            created_at,
            updated_at,
        }
    }

    /// Returns the operator ID.
    pub fn id(&self) -> OperatorId {
        self.id
    }

    /// Returns the operator name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the operator currently accepts assignments.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Maximum concurrent load.
    pub fn max_load(&self) -> i32 {
        self.max_load
    }

    /// Current assigned, unresolved contact count.
    pub fn current_load(&self) -> i32 {
        self.current_load
    }

    /// Returns the creation time.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the last update time.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Point-in-time eligibility: active and below capacity.
    ///
    /// Advisory only; the capacity invariant is enforced at assignment time
    /// by a conditional atomic increment in the storage layer.
    pub fn is_eligible(&self) -> bool {
        self.is_active && self.current_load < self.max_load
    }
}

/// Fields for creating a new operator.
#[derive(Debug, Clone)]
pub struct NewOperator {
    pub name: String,
    pub is_active: bool,
    pub max_load: i32,
}

impl NewOperator {
    /// Validates name and load bounds.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_max_load(self.max_load)
    }
}

/// Partial update of operator attributes.
#[derive(Debug, Clone, Default)]
pub struct OperatorUpdate {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub max_load: Option<i32>,
}

impl OperatorUpdate {
    /// Validates whichever fields are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(max_load) = self.max_load {
            validate_max_load(max_load)?;
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

fn validate_max_load(max_load: i32) -> Result<(), DomainError> {
    if max_load < 1 || max_load > MAX_LOAD_CEILING {
        return Err(DomainError::validation(
            "max_load",
            format!("must be between 1 and {}", MAX_LOAD_CEILING),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(is_active: bool, max_load: i32, current_load: i32) -> Operator {
        let now = Timestamp::now();
        Operator::reconstitute(
            OperatorId::new(1),
            "Anna".into(),
            is_active,
            max_load,
            current_load,
            now,
            now,
        )
    }

    #[test]
    fn eligible_when_active_and_below_capacity() {
        assert!(operator(true, 5, 4).is_eligible());
    }

    #[test]
    fn ineligible_at_capacity() {
        assert!(!operator(true, 5, 5).is_eligible());
    }

    #[test]
    fn ineligible_when_inactive() {
        assert!(!operator(false, 5, 0).is_eligible());
    }

    #[test]
    fn new_operator_validates_bounds() {
        let op = NewOperator {
            name: "Anna".into(),
            is_active: true,
            max_load: 0,
        };
        assert!(op.validate().is_err());

        let op = NewOperator {
            name: "".into(),
            is_active: true,
            max_load: 10,
        };
        assert!(op.validate().is_err());

        let op = NewOperator {
            name: "Anna".into(),
            is_active: true,
            max_load: 10,
        };
        assert!(op.validate().is_ok());
    }
}
