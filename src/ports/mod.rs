//! Ports - contracts between the application layer and infrastructure.
//!
//! Each port is an object-safe async trait consumed as `Arc<dyn Trait>`;
//! PostgreSQL implementations live in `adapters::postgres`.

mod contact_repository;
mod lead_repository;
mod operator_repository;
mod source_repository;

pub use contact_repository::ContactRepository;
pub use lead_repository::LeadRepository;
pub use operator_repository::OperatorRepository;
pub use source_repository::SourceRepository;
