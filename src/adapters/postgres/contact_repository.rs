//! PostgreSQL implementation of ContactRepository.
//!
//! `create` is the engine's atomicity boundary: the contact insert and the
//! conditional load increment run in one transaction, so a failure between
//! them can never leave an assigned contact whose operator load was not
//! incremented.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::contact::{Contact, NewContact};
use crate::domain::foundation::{ContactId, DomainError, ErrorCode, LeadId, OperatorId, SourceId, Timestamp};
use crate::ports::ContactRepository;

const CONTACT_COLUMNS: &str =
    "id, lead_id, source_id, operator_id, message, is_resolved, created_at, updated_at";

/// PostgreSQL implementation of ContactRepository.
#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM contacts WHERE id = $1",
            CONTACT_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch contact: {}", e)))?;

        row.map(row_to_contact).transpose()
    }

    async fn list_by_lead(&self, lead_id: LeadId) -> Result<Vec<Contact>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM contacts WHERE lead_id = $1 ORDER BY created_at",
            CONTACT_COLUMNS
        ))
        .bind(lead_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list contacts by lead: {}", e)))?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn list_by_operator(
        &self,
        operator_id: OperatorId,
        resolved: Option<bool>,
    ) -> Result<Vec<Contact>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM contacts
            WHERE operator_id = $1 AND ($2::boolean IS NULL OR is_resolved = $2)
            ORDER BY created_at
            "#,
            CONTACT_COLUMNS
        ))
        .bind(operator_id.as_i64())
        .bind(resolved)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to list contacts by operator: {}", e))
        })?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("Failed to begin transaction: {}", e)))?;

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO contacts (lead_id, source_id, operator_id, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(contact.lead_id.as_i64())
        .bind(contact.source_id.as_i64())
        .bind(contact.operator_id.map(|id| id.as_i64()))
        .bind(&contact.message)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert contact: {}", e)))?;

        if let Some(operator_id) = contact.operator_id {
            // Conditional delta update: capacity is enforced here, at the
            // same commit point as the insert, not just at selection time.
            let result = sqlx::query(
                r#"
                UPDATE operators
                SET current_load = current_load + 1, updated_at = now()
                WHERE id = $1 AND current_load < max_load
                "#,
            )
            .bind(operator_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to increment operator load: {}", e))
            })?;

            if result.rows_affected() == 0 {
                // Dropping the transaction rolls the insert back.
                return Err(DomainError::new(
                    ErrorCode::OperatorAtCapacity,
                    format!("Operator at capacity or missing: {}", operator_id),
                ));
            }
        }

        let created = row_to_contact(row)?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("Failed to commit contact: {}", e)))?;

        Ok(created)
    }

    async fn mark_resolved(&self, id: ContactId) -> Result<Contact, DomainError> {
        // The is_resolved guard makes the transition exactly-once even
        // under concurrent resolve calls.
        let row = sqlx::query(&format!(
            r#"
            UPDATE contacts
            SET is_resolved = true, updated_at = now()
            WHERE id = $1 AND is_resolved = false
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to resolve contact: {}", e)))?;

        if let Some(row) = row {
            return row_to_contact(row);
        }

        match self.find_by_id(id).await? {
            Some(_) => Err(DomainError::new(
                ErrorCode::AlreadyResolved,
                format!("Contact already resolved: {}", id),
            )),
            None => Err(DomainError::new(
                ErrorCode::ContactNotFound,
                format!("Contact not found: {}", id),
            )),
        }
    }
}

fn row_to_contact(row: PgRow) -> Result<Contact, DomainError> {
    let id: i64 = column(&row, "id")?;
    let lead_id: i64 = column(&row, "lead_id")?;
    let source_id: i64 = column(&row, "source_id")?;
    let operator_id: Option<i64> = column(&row, "operator_id")?;
    let message: Option<String> = column(&row, "message")?;
    let is_resolved: bool = column(&row, "is_resolved")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(Contact::reconstitute(
        ContactId::new(id),
        LeadId::new(lead_id),
        SourceId::new(source_id),
        operator_id.map(OperatorId::new),
        message,
        is_resolved,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
