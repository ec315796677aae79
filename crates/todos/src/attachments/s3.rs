//! S3 attachment store.
//!
//! Upload URLs are pre-signed `PutObject` requests for key `<todoId>`.
//! Retrieval URLs are the plain virtual-hosted object URL.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use todos_core::attachment::{
    object_url, s3_bucket_base_url, AttachmentError, AttachmentStore, Result,
};

pub struct S3AttachmentStore {
    client: Client,
    bucket: String,
    base_url: String,
    expiration: Duration,
}

impl S3AttachmentStore {
    pub fn new(client: Client, bucket: impl Into<String>, expiration: Duration) -> Self {
        let bucket = bucket.into();
        Self {
            client,
            base_url: s3_bucket_base_url(&bucket),
            bucket,
            expiration,
        }
    }

    /// Creates a store using the AWS SDK default credential chain.
    pub async fn from_env(bucket: impl Into<String>, expiration: Duration) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket, expiration)
    }
}

#[async_trait]
impl AttachmentStore for S3AttachmentStore {
    fn retrieval_url(&self, todo_id: &str) -> String {
        object_url(&self.base_url, todo_id)
    }

    async fn upload_url(&self, todo_id: &str) -> Result<String> {
        let presigning = PresigningConfig::expires_in(self.expiration)
            .map_err(|e| AttachmentError::InvalidConfig(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(todo_id)
            .presigned(presigning)
            .await
            .map_err(|e| AttachmentError::Presign(e.to_string()))?;

        tracing::debug!(bucket = %self.bucket, key = %todo_id, "Presigned attachment upload");
        Ok(request.uri().to_string())
    }
}
