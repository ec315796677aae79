use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single item on a user's task list.
///
/// `todo_id` is globally unique and is the primary lookup key; `user_id`
/// identifies the owner and is the only identity allowed to touch the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub user_id: String,
    pub todo_id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub due_date: String,
    pub done: bool,
    /// Public read URL of the attached file, if an upload was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// Creates a new, not-done item without an attachment.
    pub fn new(
        user_id: impl Into<String>,
        todo_id: impl Into<String>,
        created_at: DateTime<Utc>,
        name: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            todo_id: todo_id.into(),
            created_at,
            name: name.into(),
            due_date: due_date.into(),
            done: false,
            attachment_url: None,
        }
    }

    /// Returns true if `user_id` owns this item.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Returns true if an attachment URL has been recorded.
    pub fn has_attachment(&self) -> bool {
        self.attachment_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }
}

/// A partial update of the mutable, user-editable fields of a [`TodoItem`].
///
/// `attachment_url` is deliberately absent: it can only be set through the
/// attachment flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl TodoUpdate {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.due_date.is_none() && self.done.is_none()
    }

    /// Apply the update to an item in place.
    pub fn apply_to(&self, item: &mut TodoItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(due_date) = &self.due_date {
            item.due_date = due_date.clone();
        }
        if let Some(done) = self.done {
            item.done = done;
        }
    }
}
