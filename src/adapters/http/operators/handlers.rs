//! HTTP handlers for operator endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::contacts::ContactResponse;
use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::contact::ListOperatorContactsHandler;
use crate::application::handlers::operator::{
    CreateOperatorCommand, CreateOperatorHandler, DeleteOperatorHandler, GetOperatorHandler,
    ListOperatorsHandler, UpdateOperatorCommand, UpdateOperatorHandler,
};
use crate::domain::foundation::OperatorId;

use super::dto::{CreateOperatorRequest, OperatorContactsQuery, OperatorResponse, UpdateOperatorRequest};

#[derive(Clone)]
pub struct OperatorHandlers {
    create_handler: Arc<CreateOperatorHandler>,
    get_handler: Arc<GetOperatorHandler>,
    list_handler: Arc<ListOperatorsHandler>,
    update_handler: Arc<UpdateOperatorHandler>,
    delete_handler: Arc<DeleteOperatorHandler>,
    list_contacts_handler: Arc<ListOperatorContactsHandler>,
}

impl OperatorHandlers {
    pub fn new(
        create_handler: Arc<CreateOperatorHandler>,
        get_handler: Arc<GetOperatorHandler>,
        list_handler: Arc<ListOperatorsHandler>,
        update_handler: Arc<UpdateOperatorHandler>,
        delete_handler: Arc<DeleteOperatorHandler>,
        list_contacts_handler: Arc<ListOperatorContactsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            update_handler,
            delete_handler,
            list_contacts_handler,
        }
    }
}

/// POST /api/v1/operators - Register a new operator.
pub async fn create_operator(
    State(handlers): State<OperatorHandlers>,
    Json(req): Json<CreateOperatorRequest>,
) -> Response {
    let cmd = CreateOperatorCommand {
        name: req.name,
        is_active: req.is_active,
        max_load: req.max_load,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(operator) => {
            let response: OperatorResponse = operator.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/operators - List all operators.
pub async fn list_operators(State(handlers): State<OperatorHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(operators) => {
            let response: Vec<OperatorResponse> =
                operators.into_iter().map(OperatorResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/operators/:id - Fetch one operator.
pub async fn get_operator(
    State(handlers): State<OperatorHandlers>,
    Path(operator_id): Path<i64>,
) -> Response {
    match handlers
        .get_handler
        .handle(OperatorId::new(operator_id))
        .await
    {
        Ok(operator) => {
            let response: OperatorResponse = operator.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/operators/:id - Update operator attributes.
pub async fn update_operator(
    State(handlers): State<OperatorHandlers>,
    Path(operator_id): Path<i64>,
    Json(req): Json<UpdateOperatorRequest>,
) -> Response {
    let cmd = UpdateOperatorCommand {
        name: req.name,
        is_active: req.is_active,
        max_load: req.max_load,
    };

    match handlers
        .update_handler
        .handle(OperatorId::new(operator_id), cmd)
        .await
    {
        Ok(operator) => {
            let response: OperatorResponse = operator.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/operators/:id - Remove an operator.
pub async fn delete_operator(
    State(handlers): State<OperatorHandlers>,
    Path(operator_id): Path<i64>,
) -> Response {
    match handlers
        .delete_handler
        .handle(OperatorId::new(operator_id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/operators/:id/contacts - List contacts assigned to an
/// operator, optionally filtered by `?resolved=`.
pub async fn list_operator_contacts(
    State(handlers): State<OperatorHandlers>,
    Path(operator_id): Path<i64>,
    Query(query): Query<OperatorContactsQuery>,
) -> Response {
    match handlers
        .list_contacts_handler
        .handle(OperatorId::new(operator_id), query.resolved)
        .await
    {
        Ok(contacts) => {
            let response: Vec<ContactResponse> =
                contacts.into_iter().map(ContactResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
