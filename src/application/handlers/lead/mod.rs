//! Lead management handlers.

mod get_lead;
mod list_lead_contacts;
mod update_lead;

pub use get_lead::GetLeadHandler;
pub use list_lead_contacts::ListLeadContactsHandler;
pub use update_lead::{UpdateLeadCommand, UpdateLeadHandler};
