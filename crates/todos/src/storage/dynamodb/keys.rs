//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the
//! single-table design. Items live under their own ID; the owner index
//! (GSI1) groups them by user, sorted by creation time.

use chrono::{DateTime, SecondsFormat, Utc};

pub const TODO_PREFIX: &str = "TODO#";
pub const USER_PREFIX: &str = "USER#";

/// Generate primary key for a todo item.
///
/// Pattern: `TODO#<todo_id>`
pub fn todo_pk(todo_id: &str) -> String {
    format!("{TODO_PREFIX}{todo_id}")
}

/// Generate sort key for a todo item.
///
/// Pattern: `TODO#<todo_id>` (same as PK for single-item queries)
pub fn todo_sk(todo_id: &str) -> String {
    format!("{TODO_PREFIX}{todo_id}")
}

/// Generate GSI1 partition key (owner lookup).
///
/// Pattern: `USER#<user_id>`
pub fn todo_gsi1_pk(user_id: &str) -> String {
    format!("{USER_PREFIX}{user_id}")
}

/// Generate GSI1 sort key (creation-ordered lookup).
///
/// Pattern: `TODO#<created_at>#<todo_id>`, with `created_at` in RFC 3339 at
/// millisecond precision so keys sort lexicographically by time.
pub fn todo_gsi1_sk(created_at: DateTime<Utc>, todo_id: &str) -> String {
    format!(
        "{TODO_PREFIX}{}#{todo_id}",
        created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
