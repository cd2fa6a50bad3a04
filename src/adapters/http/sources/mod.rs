//! Source endpoints: CRUD plus routing-weight management.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateSourceRequest, SetWeightRequest, SourceResponse, UpdateSourceRequest, WeightResponse};
pub use handlers::SourceHandlers;
pub use routes::source_routes;
