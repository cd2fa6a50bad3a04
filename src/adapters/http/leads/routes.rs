//! HTTP routes for lead endpoints.

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers::{get_lead, list_lead_contacts, update_lead, LeadHandlers};

/// Creates the lead router with all endpoints.
pub fn lead_routes(handlers: LeadHandlers) -> Router {
    Router::new()
        .route("/:id", get(get_lead))
        .route("/:id", patch(update_lead))
        .route("/:id/contacts", get(list_lead_contacts))
        .with_state(handlers)
}
