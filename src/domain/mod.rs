//! Domain layer - aggregates, value objects, and the routing engine core.

pub mod contact;
pub mod foundation;
pub mod lead;
pub mod operator;
pub mod routing;
pub mod source;
