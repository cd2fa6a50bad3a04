//! PostgreSQL implementation of SourceRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, OperatorId, SourceId, Timestamp};
use crate::domain::source::{NewSource, Source, SourceOperatorWeight, SourceUpdate};
use crate::ports::SourceRepository;

/// PostgreSQL implementation of SourceRepository.
#[derive(Clone)]
pub struct PostgresSourceRepository {
    pool: PgPool,
}

impl PostgresSourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SourceRepository for PostgresSourceRepository {
    async fn find_by_id(&self, id: SourceId) -> Result<Option<Source>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, description, created_at, updated_at FROM sources WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch source: {}", e)))?;

        row.map(row_to_source).transpose()
    }

    async fn list(&self) -> Result<Vec<Source>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, description, created_at, updated_at FROM sources ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list sources: {}", e)))?;

        rows.into_iter().map(row_to_source).collect()
    }

    async fn create(&self, source: NewSource) -> Result<Source, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO sources (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&source.name)
        .bind(&source.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert source: {}", e)))?;

        row_to_source(row)
    }

    async fn update(
        &self,
        id: SourceId,
        update: SourceUpdate,
    ) -> Result<Option<Source>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE sources SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(&update.name)
        .bind(&update.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update source: {}", e)))?;

        row.map(row_to_source).transpose()
    }

    async fn delete(&self, id: SourceId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sources WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete source: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_weight(
        &self,
        source_id: SourceId,
        operator_id: OperatorId,
        weight: i32,
    ) -> Result<SourceOperatorWeight, DomainError> {
        // One row per (source, operator) pair; setting again overwrites.
        let row = sqlx::query(
            r#"
            INSERT INTO source_operator_weights (source_id, operator_id, weight)
            VALUES ($1, $2, $3)
            ON CONFLICT (source_id, operator_id) DO UPDATE SET weight = EXCLUDED.weight
            RETURNING source_id, operator_id, weight
            "#,
        )
        .bind(source_id.as_i64())
        .bind(operator_id.as_i64())
        .bind(weight)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to set operator weight: {}", e)))?;

        row_to_weight(row)
    }

    async fn weights_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<SourceOperatorWeight>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT source_id, operator_id, weight
            FROM source_operator_weights
            WHERE source_id = $1
            ORDER BY operator_id
            "#,
        )
        .bind(source_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch operator weights: {}", e)))?;

        rows.into_iter().map(row_to_weight).collect()
    }
}

fn row_to_source(row: PgRow) -> Result<Source, DomainError> {
    let id: i64 = column(&row, "id")?;
    let name: String = column(&row, "name")?;
    let description: Option<String> = column(&row, "description")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(Source::reconstitute(
        SourceId::new(id),
        name,
        description,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

fn row_to_weight(row: PgRow) -> Result<SourceOperatorWeight, DomainError> {
    let source_id: i64 = column(&row, "source_id")?;
    let operator_id: i64 = column(&row, "operator_id")?;
    let weight: i32 = column(&row, "weight")?;

    Ok(SourceOperatorWeight {
        source_id: SourceId::new(source_id),
        operator_id: OperatorId::new(operator_id),
        weight,
    })
}
