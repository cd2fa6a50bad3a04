//! Source repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OperatorId, SourceId};
use crate::domain::source::{NewSource, Source, SourceOperatorWeight, SourceUpdate};

/// Repository port for source persistence and per-source operator weights.
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Find a source by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: SourceId) -> Result<Option<Source>, DomainError>;

    /// List all sources.
    async fn list(&self) -> Result<Vec<Source>, DomainError>;

    /// Insert a new source.
    async fn create(&self, source: NewSource) -> Result<Source, DomainError>;

    /// Partial update of source attributes. Returns `None` if missing.
    async fn update(
        &self,
        id: SourceId,
        update: SourceUpdate,
    ) -> Result<Option<Source>, DomainError>;

    /// Delete a source. Returns `false` if it did not exist.
    async fn delete(&self, id: SourceId) -> Result<bool, DomainError>;

    /// Upsert the weight for a (source, operator) pair.
    ///
    /// Setting a weight for an existing pair overwrites it; at most one row
    /// per pair ever exists.
    async fn set_weight(
        &self,
        source_id: SourceId,
        operator_id: OperatorId,
        weight: i32,
    ) -> Result<SourceOperatorWeight, DomainError>;

    /// List all weight rows configured for a source.
    async fn weights_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<SourceOperatorWeight>, DomainError>;
}
