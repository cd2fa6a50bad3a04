//! CreateSourceHandler - registers a new contact channel.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::source::{NewSource, Source};
use crate::ports::SourceRepository;

/// Command to create a source.
#[derive(Debug, Clone)]
pub struct CreateSourceCommand {
    pub name: String,
    pub description: Option<String>,
}

pub struct CreateSourceHandler {
    sources: Arc<dyn SourceRepository>,
}

impl CreateSourceHandler {
    pub fn new(sources: Arc<dyn SourceRepository>) -> Self {
        Self { sources }
    }

    pub async fn handle(&self, cmd: CreateSourceCommand) -> Result<Source, DomainError> {
        let new_source = NewSource {
            name: cmd.name,
            description: cmd.description,
        };
        new_source.validate()?;
        self.sources.create(new_source).await
    }
}
