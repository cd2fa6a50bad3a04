//! PostgreSQL implementation of OperatorRepository.
//!
//! Load accounting is expressed as storage-side delta updates
//! (`current_load = current_load + delta`), never computed in application
//! memory from a prior read, so concurrent adjustments cannot lose updates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, ErrorCode, OperatorId, SourceId, Timestamp};
use crate::domain::operator::{NewOperator, Operator, OperatorUpdate};
use crate::domain::routing::Candidate;
use crate::ports::OperatorRepository;

const OPERATOR_COLUMNS: &str = "id, name, is_active, max_load, current_load, created_at, updated_at";

/// PostgreSQL implementation of OperatorRepository.
#[derive(Clone)]
pub struct PostgresOperatorRepository {
    pool: PgPool,
}

impl PostgresOperatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn adjust_load(&self, id: OperatorId, delta: i32) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE operators SET current_load = current_load + $2, updated_at = now() WHERE id = $1",
        )
        .bind(id.as_i64())
        .bind(delta)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to adjust operator load: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::OperatorNotFound,
                format!("Operator not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl OperatorRepository for PostgresOperatorRepository {
    async fn find_by_id(&self, id: OperatorId) -> Result<Option<Operator>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM operators WHERE id = $1",
            OPERATOR_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch operator: {}", e)))?;

        row.map(row_to_operator).transpose()
    }

    async fn list(&self) -> Result<Vec<Operator>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM operators ORDER BY id",
            OPERATOR_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list operators: {}", e)))?;

        rows.into_iter().map(row_to_operator).collect()
    }

    async fn candidates_for_source(
        &self,
        source_id: SourceId,
    ) -> Result<Vec<Candidate>, DomainError> {
        // Stable order keeps the cumulative-weight walk deterministic for a
        // given snapshot; inactive operators are dropped at the storage
        // layer and the selector re-checks eligibility anyway.
        let rows = sqlx::query(
            r#"
            SELECT o.id, o.name, o.is_active, o.max_load, o.current_load,
                   o.created_at, o.updated_at, w.weight
            FROM operators o
            JOIN source_operator_weights w ON w.operator_id = o.id
            WHERE w.source_id = $1 AND o.is_active
            ORDER BY o.id
            "#,
        )
        .bind(source_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to fetch candidates for source: {}", e))
        })?;

        rows.into_iter()
            .map(|row| {
                let weight: i32 = column(&row, "weight")?;
                Ok(Candidate::new(row_to_operator(row)?, weight))
            })
            .collect()
    }

    async fn create(&self, operator: NewOperator) -> Result<Operator, DomainError> {
        let row = sqlx::query(&format!(
            "INSERT INTO operators (name, is_active, max_load) VALUES ($1, $2, $3) RETURNING {}",
            OPERATOR_COLUMNS
        ))
        .bind(&operator.name)
        .bind(operator.is_active)
        .bind(operator.max_load)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert operator: {}", e)))?;

        row_to_operator(row)
    }

    async fn update(
        &self,
        id: OperatorId,
        update: OperatorUpdate,
    ) -> Result<Option<Operator>, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE operators SET
                name = COALESCE($2, name),
                is_active = COALESCE($3, is_active),
                max_load = COALESCE($4, max_load),
                updated_at = now()
            WHERE id = $1
            RETURNING {}
            "#,
            OPERATOR_COLUMNS
        ))
        .bind(id.as_i64())
        .bind(&update.name)
        .bind(update.is_active)
        .bind(update.max_load)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update operator: {}", e)))?;

        row.map(row_to_operator).transpose()
    }

    async fn delete(&self, id: OperatorId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM operators WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete operator: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_load(&self, id: OperatorId) -> Result<(), DomainError> {
        self.adjust_load(id, 1).await
    }

    async fn decrement_load(&self, id: OperatorId) -> Result<(), DomainError> {
        self.adjust_load(id, -1).await
    }
}

fn row_to_operator(row: PgRow) -> Result<Operator, DomainError> {
    let id: i64 = column(&row, "id")?;
    let name: String = column(&row, "name")?;
    let is_active: bool = column(&row, "is_active")?;
    let max_load: i32 = column(&row, "max_load")?;
    let current_load: i32 = column(&row, "current_load")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(Operator::reconstitute(
        OperatorId::new(id),
        name,
        is_active,
        max_load,
        current_load,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
