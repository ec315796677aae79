//! In-memory storage backend.
//!
//! Stores todos in a `HashMap` behind `Arc<RwLock<_>>`. Used for local
//! development and as the backing store in handler tests.

mod repository;

pub use repository::InMemoryRepository;
