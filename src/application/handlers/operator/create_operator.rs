//! CreateOperatorHandler - registers a new support operator.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::operator::{NewOperator, Operator};
use crate::ports::OperatorRepository;

/// Command to create an operator.
#[derive(Debug, Clone)]
pub struct CreateOperatorCommand {
    pub name: String,
    pub is_active: bool,
    pub max_load: i32,
}

/// Handler for operator creation.
pub struct CreateOperatorHandler {
    operators: Arc<dyn OperatorRepository>,
}

impl CreateOperatorHandler {
    pub fn new(operators: Arc<dyn OperatorRepository>) -> Self {
        Self { operators }
    }

    pub async fn handle(&self, cmd: CreateOperatorCommand) -> Result<Operator, DomainError> {
        let new_operator = NewOperator {
            name: cmd.name,
            is_active: cmd.is_active,
            max_load: cmd.max_load,
        };
        new_operator.validate()?;
        self.operators.create(new_operator).await
    }
}
