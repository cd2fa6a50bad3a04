//! Command and query handlers, one per file, grouped by resource.

pub mod contact;
pub mod lead;
pub mod operator;
pub mod routing;
pub mod source;
