//! Routing engine core - operator eligibility and weighted random selection.

mod errors;
pub mod selection;

pub use errors::RoutingError;
pub use selection::{eligible_candidates, pick_weighted, select_operator, Candidate};
