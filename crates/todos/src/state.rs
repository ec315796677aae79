//! Application state.
//!
//! Holds the todo service and the token verifier. Backends are picked at
//! compile time; each factory below is gated on its feature.

use std::sync::Arc;

use axum::extract::FromRef;
use todos_core::attachment::AttachmentStore;
use todos_core::service::TodoService;
use todos_core::storage::TodoRepository;

use crate::auth::AuthConfig;
use crate::config::Config;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
    pub auth: Arc<AuthConfig>,
}

impl FromRef<AppState> for Arc<AuthConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl AppState {
    /// Creates state over the backends selected by feature flags.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        anyhow::ensure!(
            config.signed_url_expiration_seconds > 0,
            "SIGNED_URL_EXPIRATION must be a positive number of seconds"
        );

        let repository = repository(config).await;
        let attachments = attachment_store(config).await;

        tracing::info!(
            storage = STORAGE_BACKEND,
            attachments = ATTACHMENT_BACKEND,
            "Initialized backends"
        );

        Ok(Self::build(repository, attachments, config))
    }

    fn build(
        repository: Arc<dyn TodoRepository>,
        attachments: Arc<dyn AttachmentStore>,
        config: &Config,
    ) -> Self {
        Self {
            service: TodoService::new(repository, attachments),
            auth: Arc::new(AuthConfig::new(&config.jwt_secret)),
        }
    }
}

// ============================================================================
// Backend factories
// ============================================================================

#[cfg(feature = "inmemory")]
const STORAGE_BACKEND: &str = "inmemory";

#[cfg(feature = "inmemory")]
async fn repository(_config: &Config) -> Arc<dyn TodoRepository> {
    Arc::new(crate::storage::InMemoryRepository::new())
}

#[cfg(feature = "dynamodb")]
const STORAGE_BACKEND: &str = "dynamodb";

#[cfg(feature = "dynamodb")]
async fn repository(config: &Config) -> Arc<dyn TodoRepository> {
    Arc::new(
        crate::storage::DynamoDbRepository::from_env(&config.table_name, &config.owner_index)
            .await,
    )
}

#[cfg(feature = "local-attachments")]
const ATTACHMENT_BACKEND: &str = "local";

#[cfg(feature = "local-attachments")]
async fn attachment_store(config: &Config) -> Arc<dyn AttachmentStore> {
    Arc::new(crate::attachments::LocalAttachmentStore::new(
        &config.attachment_base_url,
        config.signed_url_expiration(),
    ))
}

#[cfg(feature = "s3")]
const ATTACHMENT_BACKEND: &str = "s3";

#[cfg(feature = "s3")]
async fn attachment_store(config: &Config) -> Arc<dyn AttachmentStore> {
    Arc::new(
        crate::attachments::S3AttachmentStore::from_env(
            &config.attachment_bucket,
            config.signed_url_expiration(),
        )
        .await,
    )
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
impl AppState {
    /// In-memory state verifying tokens signed with the test secret.
    pub fn for_tests() -> Self {
        use std::time::Duration;

        use crate::attachments::LocalAttachmentStore;
        use crate::auth::test_support::TEST_SECRET;
        use crate::storage::InMemoryRepository;

        let config =
            Config::from_lookup(|key| (key == "JWT_SECRET").then(|| TEST_SECRET.to_string()))
                .unwrap();

        Self::build(
            Arc::new(InMemoryRepository::new()),
            Arc::new(LocalAttachmentStore::new(
                "http://files.test/attachments",
                Duration::from_secs(300),
            )),
            &config,
        )
    }
}
