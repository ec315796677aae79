use async_trait::async_trait;

use crate::todo::{TodoItem, TodoUpdate};

use super::Result;

/// Repository for todo item persistence.
///
/// Every method maps to a single call against the underlying store. Writes
/// that take both `todo_id` and `user_id` only touch a record matching both,
/// and fail with [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
/// otherwise.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets all items owned by a user. Order is not guaranteed.
    async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>>;

    /// Gets an item by its ID, regardless of owner.
    async fn get_todo(&self, todo_id: &str) -> Result<Option<TodoItem>>;

    /// Creates a new item. Fails with `AlreadyExists` if the ID is taken.
    async fn create_todo(&self, item: &TodoItem) -> Result<()>;

    /// Applies a partial update to the name, due date and done fields.
    async fn update_todo(&self, todo_id: &str, user_id: &str, update: &TodoUpdate) -> Result<()>;

    /// Records the attachment retrieval URL. Fails with `AlreadyExists` if the
    /// item already has one, checked atomically with the write.
    async fn set_attachment_url(&self, todo_id: &str, user_id: &str, url: &str) -> Result<()>;

    /// Deletes an item.
    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<()>;
}
