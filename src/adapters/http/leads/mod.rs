//! Lead endpoints: lookup, update, and contact history.

mod dto;
mod handlers;
mod routes;

pub use dto::{LeadResponse, UpdateLeadRequest};
pub use handlers::LeadHandlers;
pub use routes::lead_routes;
