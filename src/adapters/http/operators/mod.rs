//! Operator endpoints: CRUD plus assigned-contact listing.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateOperatorRequest, OperatorResponse, UpdateOperatorRequest};
pub use handlers::OperatorHandlers;
pub use routes::operator_routes;
