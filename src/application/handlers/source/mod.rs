//! Source management handlers, including per-source operator weights.

mod create_source;
mod delete_source;
mod get_source;
mod list_sources;
mod list_weights;
mod set_weight;
mod update_source;

pub use create_source::{CreateSourceCommand, CreateSourceHandler};
pub use delete_source::DeleteSourceHandler;
pub use get_source::GetSourceHandler;
pub use list_sources::ListSourcesHandler;
pub use list_weights::ListWeightsHandler;
pub use set_weight::{SetWeightCommand, SetWeightHandler};
pub use update_source::{UpdateSourceCommand, UpdateSourceHandler};
