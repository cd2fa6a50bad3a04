//! GetOperatorHandler - fetches one operator by id.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OperatorId};
use crate::domain::operator::Operator;
use crate::ports::OperatorRepository;

pub struct GetOperatorHandler {
    operators: Arc<dyn OperatorRepository>,
}

impl GetOperatorHandler {
    pub fn new(operators: Arc<dyn OperatorRepository>) -> Self {
        Self { operators }
    }

    pub async fn handle(&self, id: OperatorId) -> Result<Operator, DomainError> {
        self.operators.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::OperatorNotFound,
                format!("Operator not found: {}", id),
            )
        })
    }
}
