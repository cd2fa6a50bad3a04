//! UpdateOperatorHandler - partial update of operator attributes.
//!
//! `current_load` is deliberately not updatable here; it is owned by the
//! load accounting path.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OperatorId};
use crate::domain::operator::{Operator, OperatorUpdate};
use crate::ports::OperatorRepository;

/// Command to update an operator; absent fields stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateOperatorCommand {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub max_load: Option<i32>,
}

pub struct UpdateOperatorHandler {
    operators: Arc<dyn OperatorRepository>,
}

impl UpdateOperatorHandler {
    pub fn new(operators: Arc<dyn OperatorRepository>) -> Self {
        Self { operators }
    }

    pub async fn handle(
        &self,
        id: OperatorId,
        cmd: UpdateOperatorCommand,
    ) -> Result<Operator, DomainError> {
        let update = OperatorUpdate {
            name: cmd.name,
            is_active: cmd.is_active,
            max_load: cmd.max_load,
        };
        update.validate()?;
        self.operators.update(id, update).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::OperatorNotFound,
                format!("Operator not found: {}", id),
            )
        })
    }
}
