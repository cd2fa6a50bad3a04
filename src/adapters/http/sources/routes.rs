//! HTTP routes for source endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    create_source, delete_source, get_source, list_sources, list_weights, set_weight,
    update_source, SourceHandlers,
};

/// Creates the source router with all endpoints.
pub fn source_routes(handlers: SourceHandlers) -> Router {
    Router::new()
        .route("/", get(list_sources))
        .route("/", post(create_source))
        .route("/:id", get(get_source))
        .route("/:id", patch(update_source))
        .route("/:id", delete(delete_source))
        .route("/:id/operators", get(list_weights))
        .route("/:id/operators", post(set_weight))
        .with_state(handlers)
}
