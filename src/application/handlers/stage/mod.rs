//! Stage command and query handlers.

mod create_stage;
mod delete_stage;
mod get_stage;
mod list_stages;
mod update_stage;

pub use create_stage::{CreateStageCommand, CreateStageHandler};
pub use delete_stage::{DeleteStageCommand, DeleteStageHandler};
pub use get_stage::{GetStageHandler, GetStageQuery};
pub use list_stages::{ListStagesHandler, ListStagesQuery};
pub use update_stage::{UpdateStageCommand, UpdateStageHandler};
