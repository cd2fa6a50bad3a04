//! GetSourceHandler - fetches one source by id.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SourceId};
use crate::domain::source::Source;
use crate::ports::SourceRepository;

pub struct GetSourceHandler {
    sources: Arc<dyn SourceRepository>,
}

impl GetSourceHandler {
    pub fn new(sources: Arc<dyn SourceRepository>) -> Self {
        Self { sources }
    }

    pub async fn handle(&self, id: SourceId) -> Result<Source, DomainError> {
        self.sources.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::SourceNotFound,
                format!("Source not found: {}", id),
            )
        })
    }
}
