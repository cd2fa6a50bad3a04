//! HTTP routes for operator endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    create_operator, delete_operator, get_operator, list_operator_contacts, list_operators,
    update_operator, OperatorHandlers,
};

/// Creates the operator router with all endpoints.
pub fn operator_routes(handlers: OperatorHandlers) -> Router {
    Router::new()
        .route("/", get(list_operators))
        .route("/", post(create_operator))
        .route("/:id", get(get_operator))
        .route("/:id", patch(update_operator))
        .route("/:id", delete(delete_operator))
        .route("/:id/contacts", get(list_operator_contacts))
        .with_state(handlers)
}
