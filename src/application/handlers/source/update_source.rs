//! UpdateSourceHandler - partial update of source attributes.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SourceId};
use crate::domain::source::{Source, SourceUpdate};
use crate::ports::SourceRepository;

/// Command to update a source; absent fields stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSourceCommand {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct UpdateSourceHandler {
    sources: Arc<dyn SourceRepository>,
}

impl UpdateSourceHandler {
    pub fn new(sources: Arc<dyn SourceRepository>) -> Self {
        Self { sources }
    }

    pub async fn handle(&self, id: SourceId, cmd: UpdateSourceCommand) -> Result<Source, DomainError> {
        let update = SourceUpdate {
            name: cmd.name,
            description: cmd.description,
        };
        update.validate()?;
        self.sources.update(id, update).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::SourceNotFound,
                format!("Source not found: {}", id),
            )
        })
    }
}
