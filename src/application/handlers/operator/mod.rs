//! Operator management handlers.

mod create_operator;
mod delete_operator;
mod get_operator;
mod list_operators;
mod update_operator;

pub use create_operator::{CreateOperatorCommand, CreateOperatorHandler};
pub use delete_operator::DeleteOperatorHandler;
pub use get_operator::GetOperatorHandler;
pub use list_operators::ListOperatorsHandler;
pub use update_operator::{UpdateOperatorCommand, UpdateOperatorHandler};
