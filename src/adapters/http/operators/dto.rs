//! Request/response bodies for operator endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::operator::Operator;

fn default_true() -> bool {
    true
}

/// Body of `POST /api/v1/operators`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOperatorRequest {
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub max_load: i32,
}

/// Body of `PATCH /api/v1/operators/:id`; absent fields stay unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOperatorRequest {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub max_load: Option<i32>,
}

/// Query parameters of `GET /api/v1/operators/:id/contacts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperatorContactsQuery {
    pub resolved: Option<bool>,
}

/// Operator representation returned by operator endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorResponse {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub max_load: i32,
    pub current_load: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Operator> for OperatorResponse {
    fn from(operator: Operator) -> Self {
        Self {
            id: operator.id().as_i64(),
            name: operator.name().to_string(),
            is_active: operator.is_active(),
            max_load: operator.max_load(),
            current_load: operator.current_load(),
            created_at: operator.created_at(),
            updated_at: operator.updated_at(),
        }
    }
}
