//! Pure mapping from service errors to HTTP status codes.

use crate::storage::repository_error_to_status_code;

use super::TodoError;

/// Maps a [`TodoError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `Unauthorized` -> 401
/// - `AttachmentExists` -> 400
/// - `InvalidInput` -> 400
/// - `Repository` -> see [`repository_error_to_status_code`]
/// - `Attachment` -> 502 (the object store failed us)
///
/// # Examples
///
/// ```
/// use todos_core::service::{TodoError, todo_error_to_status_code};
///
/// let error = TodoError::Unauthorized { todo_id: "abc".to_string() };
/// assert_eq!(todo_error_to_status_code(&error), 401);
/// ```
pub fn todo_error_to_status_code(error: &TodoError) -> u16 {
    match error {
        TodoError::NotFound { .. } => 404,
        TodoError::Unauthorized { .. } => 401,
        TodoError::AttachmentExists { .. } | TodoError::InvalidInput(_) => 400,
        TodoError::Repository(err) => repository_error_to_status_code(err),
        TodoError::Attachment(_) => 502,
    }
}
