//! ListSourcesHandler - lists all sources.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::source::Source;
use crate::ports::SourceRepository;

pub struct ListSourcesHandler {
    sources: Arc<dyn SourceRepository>,
}

impl ListSourcesHandler {
    pub fn new(sources: Arc<dyn SourceRepository>) -> Self {
        Self { sources }
    }

    pub async fn handle(&self) -> Result<Vec<Source>, DomainError> {
        self.sources.list().await
    }
}
