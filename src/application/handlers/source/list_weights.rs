//! ListWeightsHandler - lists the operator weights configured for a source.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SourceId};
use crate::domain::source::SourceOperatorWeight;
use crate::ports::SourceRepository;

pub struct ListWeightsHandler {
    sources: Arc<dyn SourceRepository>,
}

impl ListWeightsHandler {
    pub fn new(sources: Arc<dyn SourceRepository>) -> Self {
        Self { sources }
    }

    pub async fn handle(&self, source_id: SourceId) -> Result<Vec<SourceOperatorWeight>, DomainError> {
        if self.sources.find_by_id(source_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::SourceNotFound,
                format!("Source not found: {}", source_id),
            ));
        }
        self.sources.weights_for_source(source_id).await
    }
}
