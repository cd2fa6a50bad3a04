//! HTTP adapters - REST API surface.
//!
//! Each resource has its own router module (`dto`, `handlers`, `routes`);
//! status-code mapping for domain errors is shared in `error`.

pub mod contacts;
pub mod error;
pub mod leads;
pub mod operators;
pub mod sources;

pub use contacts::{contact_routes, ContactHandlers};
pub use error::ErrorResponse;
pub use leads::{lead_routes, LeadHandlers};
pub use operators::{operator_routes, OperatorHandlers};
pub use sources::{source_routes, SourceHandlers};
