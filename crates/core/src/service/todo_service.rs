use std::sync::Arc;

use crate::attachment::AttachmentStore;
use crate::storage::{RepositoryError, TodoRepository};
use crate::todo::{
    validate_create, validate_update, CreateTodoRequest, TodoItem, UpdateTodoRequest,
};

use super::collaborators::{Clock, IdGenerator, SystemClock, UuidGenerator};
use super::{Result, TodoError};

/// Orchestrates the todo operations over a record store and an attachment
/// store.
///
/// Items are looked up by ID alone and ownership is checked here, so a caller
/// touching someone else's item gets [`TodoError::Unauthorized`] rather than
/// [`TodoError::NotFound`].
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    attachments: Arc<dyn AttachmentStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl TodoService {
    /// Creates a service using the system clock and random UUIDs.
    pub fn new(repository: Arc<dyn TodoRepository>, attachments: Arc<dyn AttachmentStore>) -> Self {
        Self {
            repository,
            attachments,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidGenerator),
        }
    }

    /// Replaces the clock collaborator.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the ID generator collaborator.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Lists every item owned by `user_id`.
    pub async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let items = self.repository.list_todos(user_id).await?;
        tracing::debug!(%user_id, count = items.len(), "Listed todos");
        Ok(items)
    }

    /// Creates a new item for `user_id`.
    pub async fn create_todo(&self, user_id: &str, request: CreateTodoRequest) -> Result<TodoItem> {
        validate_create(&request)?;

        let item = TodoItem::new(
            user_id,
            self.ids.generate(),
            self.clock.now(),
            request.name,
            request.due_date,
        );

        self.repository.create_todo(&item).await?;

        tracing::info!(%user_id, todo_id = %item.todo_id, "Created todo");
        Ok(item)
    }

    /// Gets a single item owned by `user_id`.
    pub async fn get_todo(&self, user_id: &str, todo_id: &str) -> Result<TodoItem> {
        self.owned_todo(user_id, todo_id).await
    }

    /// Updates the name, due date and/or done flag of an item.
    pub async fn update_todo(
        &self,
        user_id: &str,
        todo_id: &str,
        request: UpdateTodoRequest,
    ) -> Result<()> {
        let update = request.into_update();
        validate_update(&update)?;

        self.owned_todo(user_id, todo_id).await?;

        if update.is_empty() {
            return Ok(());
        }

        self.repository
            .update_todo(todo_id, user_id, &update)
            .await?;

        tracing::debug!(%user_id, %todo_id, update = ?update, "Updated todo");
        Ok(())
    }

    /// Deletes an item. Deleting an item that is already gone is `NotFound`.
    pub async fn delete_todo(&self, user_id: &str, todo_id: &str) -> Result<()> {
        self.owned_todo(user_id, todo_id).await?;

        self.repository.delete_todo(todo_id, user_id).await?;

        tracing::info!(%user_id, %todo_id, "Deleted todo");
        Ok(())
    }

    /// Issues an upload URL for the item's attachment and records the
    /// attachment's retrieval URL on the item.
    ///
    /// Checks run in a fixed order: existence, ownership, then whether an
    /// attachment is already present. The upload URL is issued before the
    /// retrieval URL is recorded, so a presign failure leaves the item as it
    /// was.
    pub async fn request_attachment_upload(&self, user_id: &str, todo_id: &str) -> Result<String> {
        let item = self.owned_todo(user_id, todo_id).await?;

        if item.has_attachment() {
            return Err(TodoError::AttachmentExists {
                todo_id: todo_id.to_string(),
            });
        }

        let upload_url = self.attachments.upload_url(todo_id).await?;
        let retrieval_url = self.attachments.retrieval_url(todo_id);

        // A concurrent request may have recorded its URL since the read above.
        self.repository
            .set_attachment_url(todo_id, user_id, &retrieval_url)
            .await
            .map_err(|err| match err {
                RepositoryError::AlreadyExists { .. } => TodoError::AttachmentExists {
                    todo_id: todo_id.to_string(),
                },
                other => other.into(),
            })?;

        tracing::info!(%user_id, %todo_id, %retrieval_url, "Issued attachment upload URL");
        Ok(upload_url)
    }

    async fn owned_todo(&self, user_id: &str, todo_id: &str) -> Result<TodoItem> {
        let item = self
            .repository
            .get_todo(todo_id)
            .await?
            .ok_or_else(|| TodoError::NotFound {
                todo_id: todo_id.to_string(),
            })?;

        if !item.is_owned_by(user_id) {
            tracing::warn!(%user_id, %todo_id, "Rejected access to todo owned by another user");
            return Err(TodoError::Unauthorized {
                todo_id: todo_id.to_string(),
            });
        }

        Ok(item)
    }
}
