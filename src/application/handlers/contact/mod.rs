//! Contact query and lifecycle handlers.

mod get_contact;
mod list_operator_contacts;
mod resolve_contact;

pub use get_contact::GetContactHandler;
pub use list_operator_contacts::ListOperatorContactsHandler;
pub use resolve_contact::ResolveContactHandler;
