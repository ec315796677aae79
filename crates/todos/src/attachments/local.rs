//! Attachment URLs for local development.
//!
//! Nothing is signed: the upload URL is the retrieval URL with an
//! `X-Expires` query parameter carrying the configured lifetime.

use std::time::Duration;

use async_trait::async_trait;
use todos_core::attachment::{object_url, AttachmentStore, Result};

#[derive(Debug, Clone)]
pub struct LocalAttachmentStore {
    base_url: String,
    expiration: Duration,
}

impl LocalAttachmentStore {
    pub fn new(base_url: impl Into<String>, expiration: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            expiration,
        }
    }
}

#[async_trait]
impl AttachmentStore for LocalAttachmentStore {
    fn retrieval_url(&self, todo_id: &str) -> String {
        object_url(&self.base_url, todo_id)
    }

    async fn upload_url(&self, todo_id: &str) -> Result<String> {
        Ok(format!(
            "{}?X-Expires={}",
            self.retrieval_url(todo_id),
            self.expiration.as_secs()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_urls_are_derived_from_base() {
        let store =
            LocalAttachmentStore::new("http://localhost:3000/attachments/", Duration::from_secs(300));

        assert_eq!(
            store.retrieval_url("t1"),
            "http://localhost:3000/attachments/t1"
        );
        assert_eq!(
            store.upload_url("t1").await.unwrap(),
            "http://localhost:3000/attachments/t1?X-Expires=300"
        );
    }
}
