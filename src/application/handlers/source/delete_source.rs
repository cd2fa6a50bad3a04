//! DeleteSourceHandler - removes a source and, via schema cascade, its
//! weight rows and contacts.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SourceId};
use crate::ports::SourceRepository;

pub struct DeleteSourceHandler {
    sources: Arc<dyn SourceRepository>,
}

impl DeleteSourceHandler {
    pub fn new(sources: Arc<dyn SourceRepository>) -> Self {
        Self { sources }
    }

    pub async fn handle(&self, id: SourceId) -> Result<(), DomainError> {
        if !self.sources.delete(id).await? {
            return Err(DomainError::new(
                ErrorCode::SourceNotFound,
                format!("Source not found: {}", id),
            ));
        }
        Ok(())
    }
}
