//! HTTP handlers for contact endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::{domain_error_response, routing_error_response};
use crate::application::handlers::contact::{GetContactHandler, ResolveContactHandler};
use crate::application::handlers::routing::{RouteContactCommand, RouteContactHandler};
use crate::domain::foundation::{ContactId, SourceId};

use super::dto::{ContactResponse, CreateContactRequest};

#[derive(Clone)]
pub struct ContactHandlers {
    route_handler: Arc<RouteContactHandler>,
    get_handler: Arc<GetContactHandler>,
    resolve_handler: Arc<ResolveContactHandler>,
}

impl ContactHandlers {
    pub fn new(
        route_handler: Arc<RouteContactHandler>,
        get_handler: Arc<GetContactHandler>,
        resolve_handler: Arc<ResolveContactHandler>,
    ) -> Self {
        Self {
            route_handler,
            get_handler,
            resolve_handler,
        }
    }
}

/// POST /api/v1/contacts - Ingest a contact and route it to an operator.
///
/// Finds or creates the lead and assigns an operator; an absent
/// `operator_id` in the response means the contact is queued unassigned.
pub async fn create_contact(
    State(handlers): State<ContactHandlers>,
    Json(req): Json<CreateContactRequest>,
) -> Response {
    let cmd = RouteContactCommand {
        source_id: SourceId::new(req.source_id),
        phone: req.phone,
        email: req.email,
        name: req.name,
        message: req.message,
    };

    match handlers.route_handler.handle(cmd).await {
        Ok(routed) => {
            let response: ContactResponse = routed.contact.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => routing_error_response(e),
    }
}

/// GET /api/v1/contacts/:id - Fetch one contact.
pub async fn get_contact(
    State(handlers): State<ContactHandlers>,
    Path(contact_id): Path<i64>,
) -> Response {
    match handlers.get_handler.handle(ContactId::new(contact_id)).await {
        Ok(contact) => {
            let response: ContactResponse = contact.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/contacts/:id/resolve - Mark a contact handled.
pub async fn resolve_contact(
    State(handlers): State<ContactHandlers>,
    Path(contact_id): Path<i64>,
) -> Response {
    match handlers
        .resolve_handler
        .handle(ContactId::new(contact_id))
        .await
    {
        Ok(contact) => {
            let response: ContactResponse = contact.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
