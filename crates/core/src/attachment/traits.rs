use async_trait::async_trait;

use super::Result;

/// Object store for todo attachments.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Stable public read URL for the attachment of `todo_id`. Never touches
    /// the network.
    fn retrieval_url(&self, todo_id: &str) -> String;

    /// Time-limited, write-scoped URL for uploading the attachment of
    /// `todo_id`.
    async fn upload_url(&self, todo_id: &str) -> Result<String>;
}
