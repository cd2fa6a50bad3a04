//! Contact endpoints: ingestion (the routing engine entry point), lookup,
//! and resolution.

mod dto;
mod handlers;
mod routes;

pub use dto::{ContactResponse, CreateContactRequest};
pub use handlers::ContactHandlers;
pub use routes::contact_routes;
