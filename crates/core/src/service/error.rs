use thiserror::Error;

use crate::attachment::AttachmentError;
use crate::storage::RepositoryError;
use crate::todo::TodoValidationError;

/// Errors returned by [`TodoService`](super::TodoService) operations.
///
/// The first four variants are caller-correctable and are never retried. The
/// last two carry collaborator faults through unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo not found: {todo_id}")]
    NotFound { todo_id: String },
    #[error("Not authorized to access todo {todo_id}")]
    Unauthorized { todo_id: String },
    #[error("Todo {todo_id} already has an attachment")]
    AttachmentExists { todo_id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] TodoValidationError),
    #[error(transparent)]
    Repository(RepositoryError),
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}

impl From<RepositoryError> for TodoError {
    /// A keyed write that matched no record means the item vanished between
    /// the read and the write; callers see that as a plain not-found.
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => TodoError::NotFound { todo_id: id },
            other => TodoError::Repository(other),
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_not_found_becomes_todo_not_found() {
        let err: TodoError = RepositoryError::NotFound {
            entity_type: "TodoItem",
            id: "todo-1".to_string(),
        }
        .into();

        assert_eq!(
            err,
            TodoError::NotFound {
                todo_id: "todo-1".to_string()
            }
        );
    }

    #[test]
    fn test_repository_fault_is_carried_through() {
        let err: TodoError = RepositoryError::QueryFailed("boom".to_string()).into();

        assert_eq!(err.to_string(), "Query failed: boom");
        assert!(matches!(err, TodoError::Repository(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TodoError::AttachmentExists {
                todo_id: "todo-1".to_string()
            }
            .to_string(),
            "Todo todo-1 already has an attachment"
        );
        assert_eq!(
            TodoError::InvalidInput(TodoValidationError::EmptyName).to_string(),
            "Invalid input: Todo name cannot be empty"
        );
    }
}
