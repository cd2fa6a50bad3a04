//! HTTP handlers for lead endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::contacts::ContactResponse;
use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::lead::{
    GetLeadHandler, ListLeadContactsHandler, UpdateLeadCommand, UpdateLeadHandler,
};
use crate::domain::foundation::LeadId;

use super::dto::{LeadResponse, UpdateLeadRequest};

#[derive(Clone)]
pub struct LeadHandlers {
    get_handler: Arc<GetLeadHandler>,
    update_handler: Arc<UpdateLeadHandler>,
    list_contacts_handler: Arc<ListLeadContactsHandler>,
}

impl LeadHandlers {
    pub fn new(
        get_handler: Arc<GetLeadHandler>,
        update_handler: Arc<UpdateLeadHandler>,
        list_contacts_handler: Arc<ListLeadContactsHandler>,
    ) -> Self {
        Self {
            get_handler,
            update_handler,
            list_contacts_handler,
        }
    }
}

/// GET /api/v1/leads/:id - Fetch one lead.
pub async fn get_lead(State(handlers): State<LeadHandlers>, Path(lead_id): Path<i64>) -> Response {
    match handlers.get_handler.handle(LeadId::new(lead_id)).await {
        Ok(lead) => {
            let response: LeadResponse = lead.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/v1/leads/:id - Update lead attributes.
pub async fn update_lead(
    State(handlers): State<LeadHandlers>,
    Path(lead_id): Path<i64>,
    Json(req): Json<UpdateLeadRequest>,
) -> Response {
    let cmd = UpdateLeadCommand {
        phone: req.phone,
        email: req.email,
        name: req.name,
    };

    match handlers.update_handler.handle(LeadId::new(lead_id), cmd).await {
        Ok(lead) => {
            let response: LeadResponse = lead.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/leads/:id/contacts - List all contacts of a lead.
pub async fn list_lead_contacts(
    State(handlers): State<LeadHandlers>,
    Path(lead_id): Path<i64>,
) -> Response {
    match handlers
        .list_contacts_handler
        .handle(LeadId::new(lead_id))
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
