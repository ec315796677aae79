//! DynamoDB storage backend.
//!
//! Single-table layout:
//!
//! | Attribute | Value                              |
//! |-----------|------------------------------------|
//! | `PK`/`SK` | `TODO#<todoId>`                    |
//! | `GSI1PK`  | `USER#<userId>`                    |
//! | `GSI1SK`  | `TODO#<createdAt>#<todoId>`        |
//!
//! The owner index is named by `TODOS_CREATED_AT_INDEX`.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
