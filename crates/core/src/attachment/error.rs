use thiserror::Error;

/// Errors raised while issuing attachment URLs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("Failed to presign upload URL: {0}")]
    Presign(String),
    #[error("Invalid attachment configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for attachment operations.
pub type Result<T> = std::result::Result<T, AttachmentError>;
