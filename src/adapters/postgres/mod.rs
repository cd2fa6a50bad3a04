//! PostgreSQL implementations of the repository ports.

mod contact_repository;
mod lead_repository;
mod operator_repository;
mod source_repository;

pub use contact_repository::PostgresContactRepository;
pub use lead_repository::PostgresLeadRepository;
pub use operator_repository::PostgresOperatorRepository;
pub use source_repository::PostgresSourceRepository;

use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::foundation::DomainError;

/// Reads one column off a row, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to read column '{}': {}", name, e)))
}
