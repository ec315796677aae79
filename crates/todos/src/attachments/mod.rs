//! Attachment store backends.
//!
//! Select with exactly one of the `local-attachments` or `s3` features.

#[cfg(all(feature = "local-attachments", feature = "s3"))]
compile_error!("Cannot enable both 'local-attachments' and 's3' attachment features");

#[cfg(not(any(feature = "local-attachments", feature = "s3")))]
compile_error!("Must enable exactly one attachment feature: 'local-attachments' or 's3'");

// Always compiled: tests build their state on it.
#[cfg_attr(not(feature = "local-attachments"), allow(dead_code))]
pub mod local;

#[cfg(feature = "s3")]
pub mod s3;

#[allow(unused_imports)]
pub use local::LocalAttachmentStore;
#[cfg(feature = "s3")]
pub use s3::S3AttachmentStore;
