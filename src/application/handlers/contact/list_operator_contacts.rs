//! ListOperatorContactsHandler - lists contacts assigned to an operator,
//! optionally filtered by resolution status.

use std::sync::Arc;

use crate::domain::contact::Contact;
use crate::domain::foundation::{DomainError, ErrorCode, OperatorId};
use crate::ports::{ContactRepository, OperatorRepository};

pub struct ListOperatorContactsHandler {
    operators: Arc<dyn OperatorRepository>,
    contacts: Arc<dyn ContactRepository>,
}

impl ListOperatorContactsHandler {
    pub fn new(operators: Arc<dyn OperatorRepository>, contacts: Arc<dyn ContactRepository>) -> Self {
        Self { operators, contacts }
    }

    pub async fn handle(
        &self,
        operator_id: OperatorId,
        resolved: Option<bool>,
    ) -> Result<Vec<Contact>, DomainError> {
        if self.operators.find_by_id(operator_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::OperatorNotFound,
                format!("Operator not found: {}", operator_id),
            ));
        }
        self.contacts.list_by_operator(operator_id, resolved).await
    }
}
