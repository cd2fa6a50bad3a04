//! Shared HTTP error shaping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::routing::RoutingError;

/// JSON error body returned for every failure.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidIdentifier => StatusCode::BAD_REQUEST,
        ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::SourceNotFound
        | ErrorCode::LeadNotFound
        | ErrorCode::OperatorNotFound
        | ErrorCode::ContactNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyResolved | ErrorCode::OperatorAtCapacity => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps a domain error to a JSON response with the matching status code.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = status_for(err.code);
    (status, Json(ErrorResponse::new(err.code, err.message))).into_response()
}

/// Maps a routing error to a JSON response with the matching status code.
pub fn routing_error_response(err: RoutingError) -> Response {
    let code = err.code();
    (status_for(code), Json(ErrorResponse::new(code, err.to_string()))).into_response()
}
