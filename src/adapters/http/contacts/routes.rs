//! HTTP routes for contact endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_contact, get_contact, resolve_contact, ContactHandlers};

/// Creates the contact router with all endpoints.
pub fn contact_routes(handlers: ContactHandlers) -> Router {
    Router::new()
        .route("/", post(create_contact))
        .route("/:id", get(get_contact))
        .route("/:id/resolve", post(resolve_contact))
        .with_state(handlers)
}
