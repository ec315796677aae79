use std::{env, time::Duration};

use anyhow::{bail, Result};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Parses `LOG_FORMAT`. Anything other than `json` is human-readable.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding todo items (default: "todos")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub table_name: String,
    /// Index used to list items by owner (default: "GSI1")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub owner_index: String,
    /// S3 bucket holding attachments (default: "todos-attachments")
    #[cfg_attr(not(feature = "s3"), allow(dead_code))]
    pub attachment_bucket: String,
    /// Base URL for locally served attachments
    #[cfg_attr(not(feature = "local-attachments"), allow(dead_code))]
    pub attachment_base_url: String,
    /// Lifetime of upload URLs in seconds (default: 300)
    pub signed_url_expiration_seconds: u64,
    /// HS256 secret used to verify bearer tokens
    pub jwt_secret: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TODOS_TABLE` - DynamoDB table name (default: "todos")
    /// - `TODOS_CREATED_AT_INDEX` - list-by-owner index (default: "GSI1")
    /// - `ATTACHMENT_S3_BUCKET` - attachment bucket (default: "todos-attachments")
    /// - `ATTACHMENT_BASE_URL` - local attachment base (default: "http://localhost:3000/attachments")
    /// - `SIGNED_URL_EXPIRATION` - upload URL lifetime in seconds (default: 300)
    /// - `JWT_SECRET` - bearer token secret (required, non-empty)
    /// - `LOG_FORMAT` - `pretty` or `json` (default: "pretty")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.trim().is_empty() => secret,
            _ => bail!("JWT_SECRET must be set to a non-empty value"),
        };

        Ok(Self {
            table_name: string("TODOS_TABLE", "todos"),
            owner_index: string("TODOS_CREATED_AT_INDEX", "GSI1"),
            attachment_bucket: string("ATTACHMENT_S3_BUCKET", "todos-attachments"),
            attachment_base_url: string(
                "ATTACHMENT_BASE_URL",
                "http://localhost:3000/attachments",
            ),
            signed_url_expiration_seconds: lookup("SIGNED_URL_EXPIRATION")
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            jwt_secret,
            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        })
    }

    /// Get the upload URL lifetime as a Duration.
    pub fn signed_url_expiration(&self) -> Duration {
        Duration::from_secs(self.signed_url_expiration_seconds)
    }
}
