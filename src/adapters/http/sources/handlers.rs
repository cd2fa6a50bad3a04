//! HTTP handlers for source endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::source::{
    CreateSourceCommand, CreateSourceHandler, DeleteSourceHandler, GetSourceHandler,
    ListSourcesHandler, ListWeightsHandler, SetWeightCommand, SetWeightHandler,
    UpdateSourceCommand, UpdateSourceHandler,
};
use crate::domain::foundation::{OperatorId, SourceId};

use super::dto::{
    CreateSourceRequest, SetWeightRequest, SourceResponse, UpdateSourceRequest, WeightResponse,
};

#[derive(Clone)]
pub struct SourceHandlers {
    create_handler: Arc<CreateSourceHandler>,
    get_handler: Arc<GetSourceHandler>,
    list_handler: Arc<ListSourcesHandler>,
    update_handler: Arc<UpdateSourceHandler>,
    delete_handler: Arc<DeleteSourceHandler>,
    set_weight_handler: Arc<SetWeightHandler>,
    list_weights_handler: Arc<ListWeightsHandler>,
}

impl SourceHandlers {
    pub fn new(
        create_handler: Arc<CreateSourceHandler>,
        get_handler: Arc<GetSourceHandler>,
        list_handler: Arc<ListSourcesHandler>,
        update_handler: Arc<UpdateSourceHandler>,
        delete_handler: Arc<DeleteSourceHandler>,
        set_weight_handler: Arc<SetWeightHandler>,
        list_weights_handler: Arc<ListWeightsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            update_handler,
            delete_handler,
            set_weight_handler,
            list_weights_handler,
        }
    }
}

/// POST /api/v1/sources - Register a new source.
pub async fn create_source(
    State(handlers): State<SourceHandlers>,
    Json(req): Json<CreateSourceRequest>,
) -> Response {
    let cmd = CreateSourceCommand {
        name: req.name,
        description: req.description,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(source) => {
            let response: SourceResponse = source.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/sources - List all sources.
pub async fn list_sources(State(handlers): State<SourceHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(sources) => {
            let response: Vec<SourceResponse> =
                sources.into_iter().map(SourceResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/sources/:id - Fetch one source.
pub async fn get_source(
    State(handlers): State<SourceHandlers>,
    Path(source_id): Path<i64>,
) -> Response {
    match handlers.get_handler.handle(SourceId::new(source_id)).await {
        Ok(source) => {
            let response: SourceResponse = source.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/sources/:id - Update source attributes.
pub async fn update_source(
    State(handlers): State<SourceHandlers>,
    Path(source_id): Path<i64>,
    Json(req): Json<UpdateSourceRequest>,
) -> Response {
    let cmd = UpdateSourceCommand {
        name: req.name,
        description: req.description,
    };

    match handlers
        .update_handler
        .handle(SourceId::new(source_id), cmd)
        .await
    {
        Ok(source) => {
            let response: SourceResponse = source.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/sources/:id - Remove a source.
pub async fn delete_source(
    State(handlers): State<SourceHandlers>,
    Path(source_id): Path<i64>,
) -> Response {
    match handlers
        .delete_handler
        .handle(SourceId::new(source_id))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/sources/:id/operators - Set an operator's routing weight
/// for this source.
pub async fn set_weight(
    State(handlers): State<SourceHandlers>,
    Path(source_id): Path<i64>,
    Json(req): Json<SetWeightRequest>,
) -> Response {
    let cmd = SetWeightCommand {
        source_id: SourceId::new(source_id),
        operator_id: OperatorId::new(req.operator_id),
        weight: req.weight,
    };

    match handlers.set_weight_handler.handle(cmd).await {
        Ok(weight) => {
            let response: WeightResponse = weight.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/sources/:id/operators - List routing weights for this
/// source.
pub async fn list_weights(
    State(handlers): State<SourceHandlers>,
    Path(source_id): Path<i64>,
) -> Response {
    match handlers
        .list_weights_handler
        .handle(SourceId::new(source_id))
        .await
    {
        Ok(weights) => {
            let response: Vec<WeightResponse> =
                weights.into_iter().map(WeightResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
