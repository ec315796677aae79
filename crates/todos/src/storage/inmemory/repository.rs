//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::{RepositoryError, Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

const ENTITY_TODO: &str = "TodoItem";
const ENTITY_ATTACHMENT: &str = "Attachment";

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<String, TodoItem>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(todo_id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            entity_type: ENTITY_TODO,
            id: todo_id.to_string(),
        }
    }

    /// Looks up an item owned by `user_id`, mirroring the conditional writes
    /// of the DynamoDB backend.
    fn owned_mut<'a>(
        todos: &'a mut HashMap<String, TodoItem>,
        todo_id: &str,
        user_id: &str,
    ) -> Result<&'a mut TodoItem> {
        todos
            .get_mut(todo_id)
            .filter(|t| t.is_owned_by(user_id))
            .ok_or_else(|| Self::not_found(todo_id))
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos
            .values()
            .filter(|t| t.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn get_todo(&self, todo_id: &str) -> Result<Option<TodoItem>> {
        let todos = self.todos.read().await;
        Ok(todos.get(todo_id).cloned())
    }

    async fn create_todo(&self, item: &TodoItem) -> Result<()> {
        let mut todos = self.todos.write().await;
        if todos.contains_key(&item.todo_id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: ENTITY_TODO,
                id: item.todo_id.clone(),
            });
        }
        todos.insert(item.todo_id.clone(), item.clone());
        Ok(())
    }

    async fn update_todo(&self, todo_id: &str, user_id: &str, update: &TodoUpdate) -> Result<()> {
        let mut todos = self.todos.write().await;
        let todo = Self::owned_mut(&mut todos, todo_id, user_id)?;
        update.apply_to(todo);
        Ok(())
    }

    async fn set_attachment_url(&self, todo_id: &str, user_id: &str, url: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        let todo = Self::owned_mut(&mut todos, todo_id, user_id)?;
        if todo.has_attachment() {
            return Err(RepositoryError::AlreadyExists {
                entity_type: ENTITY_ATTACHMENT,
                id: todo_id.to_string(),
            });
        }
        todo.attachment_url = Some(url.to_string());
        Ok(())
    }

    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        Self::owned_mut(&mut todos, todo_id, user_id)?;
        todos.remove(todo_id);
        Ok(())
    }
}
