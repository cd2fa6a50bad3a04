//! SetWeightHandler - upserts the routing weight of an operator for a
//! source.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, OperatorId, SourceId};
use crate::domain::source::SourceOperatorWeight;
use crate::ports::{OperatorRepository, SourceRepository};

/// Command to set an operator's weight for a source.
#[derive(Debug, Clone)]
pub struct SetWeightCommand {
    pub source_id: SourceId,
    pub operator_id: OperatorId,
    pub weight: i32,
}

pub struct SetWeightHandler {
    sources: Arc<dyn SourceRepository>,
    operators: Arc<dyn OperatorRepository>,
}

impl SetWeightHandler {
    pub fn new(sources: Arc<dyn SourceRepository>, operators: Arc<dyn OperatorRepository>) -> Self {
        Self { sources, operators }
    }

    pub async fn handle(&self, cmd: SetWeightCommand) -> Result<SourceOperatorWeight, DomainError> {
        let weight = SourceOperatorWeight {
            source_id: cmd.source_id,
            operator_id: cmd.operator_id,
            weight: cmd.weight,
        };
        weight.validate()?;

        if self.sources.find_by_id(cmd.source_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::SourceNotFound,
                format!("Source not found: {}", cmd.source_id),
            ));
        }
        if self.operators.find_by_id(cmd.operator_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::OperatorNotFound,
                format!("Operator not found: {}", cmd.operator_id),
            ));
        }

        self.sources
            .set_weight(cmd.source_id, cmd.operator_id, cmd.weight)
            .await
    }
}
