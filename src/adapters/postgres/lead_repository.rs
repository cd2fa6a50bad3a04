//! PostgreSQL implementation of LeadRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{DomainError, ErrorCode, LeadId, Timestamp};
use crate::domain::lead::{Lead, LeadUpdate, NewLead};
use crate::ports::LeadRepository;

/// PostgreSQL implementation of LeadRepository.
#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_identifier(
        &self,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Lead>, DomainError> {
        if let Some(phone) = phone {
            if let Some(lead) = self.find_by_phone(phone).await? {
                return Ok(Some(lead));
            }
        }
        if let Some(email) = email {
            if let Some(lead) = self.find_by_email(email).await? {
                return Ok(Some(lead));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError> {
        let row = sqlx::query(
            "SELECT id, phone, email, name, created_at, updated_at FROM leads WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch lead: {}", e)))?;

        row.map(row_to_lead).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Lead>, DomainError> {
        let row = sqlx::query(
            "SELECT id, phone, email, name, created_at, updated_at FROM leads WHERE phone = $1",
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch lead by phone: {}", e)))?;

        row.map(row_to_lead).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Lead>, DomainError> {
        let row = sqlx::query(
            "SELECT id, phone, email, name, created_at, updated_at FROM leads WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch lead by email: {}", e)))?;

        row.map(row_to_lead).transpose()
    }

    async fn create(&self, lead: NewLead) -> Result<Lead, DomainError> {
        // ON CONFLICT DO NOTHING absorbs a concurrent insert of the same
        // phone/email; the loser of the race re-reads the winner's row.
        let row = sqlx::query(
            r#"
            INSERT INTO leads (phone, email, name)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            RETURNING id, phone, email, name, created_at, updated_at
            "#,
        )
        .bind(&lead.phone)
        .bind(&lead.email)
        .bind(&lead.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert lead: {}", e)))?;

        if let Some(row) = row {
            return row_to_lead(row);
        }

        self.find_by_identifier(lead.phone.as_deref(), lead.email.as_deref())
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    "Lead insert conflicted but no matching record was found",
                )
            })
    }

    async fn update_name(&self, id: LeadId, name: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE leads SET name = $2, updated_at = now() WHERE id = $1")
            .bind(id.as_i64())
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update lead name: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::LeadNotFound,
                format!("Lead not found: {}", id),
            ));
        }
        Ok(())
    }

    async fn update(&self, id: LeadId, update: LeadUpdate) -> Result<Option<Lead>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE leads SET
                phone = COALESCE($2, phone),
                email = COALESCE($3, email),
                name = COALESCE($4, name),
                updated_at = now()
            WHERE id = $1
            RETURNING id, phone, email, name, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(&update.phone)
        .bind(&update.email)
        .bind(&update.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update lead: {}", e)))?;

        row.map(row_to_lead).transpose()
    }
}

fn row_to_lead(row: PgRow) -> Result<Lead, DomainError> {
    let id: i64 = column(&row, "id")?;
    let phone: Option<String> = column(&row, "phone")?;
    let email: Option<String> = column(&row, "email")?;
    let name: Option<String> = column(&row, "name")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;
    let updated_at: DateTime<Utc> = column(&row, "updated_at")?;

    Ok(Lead::reconstitute(
        LeadId::new(id),
        phone,
        email,
        name,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
