//! Task service: the user-facing todo operations.
//!
//! [`TodoService`] is constructed once with its collaborators and cloned into
//! whatever transport sits on top of it.

mod collaborators;
mod error;
mod http_mapping;
mod todo_service;

pub use collaborators::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use error::{Result, TodoError};
pub use http_mapping::todo_error_to_status_code;
pub use todo_service::TodoService;
