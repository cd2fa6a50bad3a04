//! DeleteOperatorHandler - removes an operator.
//!
//! Existing contacts keep their history; the schema sets their operator
//! reference to NULL on delete.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OperatorId};
use crate::ports::OperatorRepository;

pub struct DeleteOperatorHandler {
    operators: Arc<dyn OperatorRepository>,
}

impl DeleteOperatorHandler {
    pub fn new(operators: Arc<dyn OperatorRepository>) -> Self {
        Self { operators }
    }

    pub async fn handle(&self, id: OperatorId) -> Result<(), DomainError> {
        if !self.operators.delete(id).await? {
            return Err(DomainError::new(
                ErrorCode::OperatorNotFound,
                format!("Operator not found: {}", id),
            ));
        }
        Ok(())
    }
}
