//! ListOperatorsHandler - lists all operators.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::operator::Operator;
use crate::ports::OperatorRepository;

pub struct ListOperatorsHandler {
    operators: Arc<dyn OperatorRepository>,
}

impl ListOperatorsHandler {
    pub fn new(operators: Arc<dyn OperatorRepository>) -> Self {
        Self { operators }
    }

    pub async fn handle(&self) -> Result<Vec<Operator>, DomainError> {
        self.operators.list().await
    }
}
