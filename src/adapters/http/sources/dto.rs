//! Request/response bodies for source endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::source::{Source, SourceOperatorWeight, DEFAULT_WEIGHT};

fn default_weight() -> i32 {
    DEFAULT_WEIGHT
}

/// Body of `POST /api/v1/sources`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSourceRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Body of `PATCH /api/v1/sources/:id`; absent fields stay unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSourceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body of `POST /api/v1/sources/:id/operators`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetWeightRequest {
    pub operator_id: i64,
    #[serde(default = "default_weight")]
    pub weight: i32,
}

/// Source representation returned by source endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SourceResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Source> for SourceResponse {
    fn from(source: Source) -> Self {
        Self {
            id: source.id().as_i64(),
            name: source.name().to_string(),
            description: source.description().map(String::from),
            created_at: source.created_at(),
            updated_at: source.updated_at(),
        }
    }
}

/// Routing-weight row returned by weight endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct WeightResponse {
    pub source_id: i64,
    pub operator_id: i64,
    pub weight: i32,
}

impl From<SourceOperatorWeight> for WeightResponse {
    fn from(weight: SourceOperatorWeight) -> Self {
        Self {
            source_id: weight.source_id.as_i64(),
            operator_id: weight.operator_id.as_i64(),
            weight: weight.weight,
        }
    }
}
