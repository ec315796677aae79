//! Attachment URL contract.
//!
//! Attachments are stored as single objects keyed by the todo ID. The
//! retrieval URL is derived without any network call; the upload URL is
//! issued by the object store and is only valid for a short time.

mod error;
mod functions;
mod traits;

pub use error::{AttachmentError, Result};
pub use functions::{object_url, s3_bucket_base_url};
pub use traits::AttachmentStore;
