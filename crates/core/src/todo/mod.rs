mod error;
mod operations;
mod requests;
mod types;

pub use error::TodoValidationError;
pub use operations::{validate_create, validate_update};
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use types::{TodoItem, TodoUpdate};
