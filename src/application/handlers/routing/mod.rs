//! Routing handlers - identity resolution and the contact-ingestion
//! orchestrator.

mod resolve_lead;
mod route_contact;

pub use resolve_lead::LeadResolver;
pub use route_contact::{RouteContactCommand, RouteContactHandler, RoutedContact};
