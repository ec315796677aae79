//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use todos_core::storage::RepositoryError;
use todos_core::todo::{TodoItem, TodoUpdate};

use super::keys;

pub const ENTITY_TYPE_TODO: &str = "TODO";

/// Condition shared by every write addressed by `(todo_id, user_id)`.
pub const OWNED_ITEM_CONDITION: &str = "attribute_exists(PK) AND userId = :userId";

/// Owned item that has no attachment yet. Binds `:userId` and `:empty`.
pub const ATTACHMENT_FREE_CONDITION: &str = "attribute_exists(PK) AND userId = :userId \
    AND (attribute_not_exists(attachmentUrl) OR attachmentUrl = :empty)";

// ============================================================================
// Todo conversions
// ============================================================================

/// Convert a TodoItem to DynamoDB item.
pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert("PK".to_string(), AttributeValue::S(keys::todo_pk(&todo.todo_id)));
    item.insert("SK".to_string(), AttributeValue::S(keys::todo_sk(&todo.todo_id)));
    item.insert(
        "GSI1PK".to_string(),
        AttributeValue::S(keys::todo_gsi1_pk(&todo.user_id)),
    );
    item.insert(
        "GSI1SK".to_string(),
        AttributeValue::S(keys::todo_gsi1_sk(todo.created_at, &todo.todo_id)),
    );

    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_TODO.to_string()),
    );

    // Data
    item.insert("userId".to_string(), AttributeValue::S(todo.user_id.clone()));
    item.insert("todoId".to_string(), AttributeValue::S(todo.todo_id.clone()));
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(todo.created_at.to_rfc3339()),
    );
    item.insert("name".to_string(), AttributeValue::S(todo.name.clone()));
    item.insert("dueDate".to_string(), AttributeValue::S(todo.due_date.clone()));
    item.insert("done".to_string(), AttributeValue::Bool(todo.done));
    if let Some(url) = &todo.attachment_url {
        item.insert("attachmentUrl".to_string(), AttributeValue::S(url.clone()));
    }

    item
}

/// Convert a DynamoDB item to TodoItem.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, RepositoryError> {
    Ok(TodoItem {
        user_id: get_string(item, "userId")?,
        todo_id: get_string(item, "todoId")?,
        created_at: get_datetime(item, "createdAt")?,
        name: get_string(item, "name")?,
        due_date: get_string(item, "dueDate")?,
        done: get_bool(item, "done")?,
        // Older records carry an empty string instead of no attribute.
        attachment_url: get_optional_string(item, "attachmentUrl").filter(|s| !s.is_empty()),
    })
}

/// Whether a failed attachment write was rejected because the caller's item
/// already carries an attachment, given the item as it was at write time.
pub fn has_recorded_attachment(
    old_item: Option<&HashMap<String, AttributeValue>>,
    user_id: &str,
) -> bool {
    old_item.is_some_and(|item| {
        get_optional_string(item, "userId").as_deref() == Some(user_id)
            && get_optional_string(item, "attachmentUrl").is_some_and(|url| !url.is_empty())
    })
}

// ============================================================================
// Update expressions
// ============================================================================

/// The pieces of an UpdateItem request for a partial todo update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build a `SET` expression touching only the fields present in `update`.
///
/// Attribute names are always aliased because `name` is a DynamoDB reserved
/// word. `:userId` is bound for [`OWNED_ITEM_CONDITION`]. Returns `None` when
/// there is nothing to set.
pub fn todo_update_expression(update: &TodoUpdate, user_id: &str) -> Option<UpdateExpression> {
    let mut clauses = Vec::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    if let Some(name) = &update.name {
        clauses.push("#name = :name");
        names.insert("#name".to_string(), "name".to_string());
        values.insert(":name".to_string(), AttributeValue::S(name.clone()));
    }
    if let Some(due_date) = &update.due_date {
        clauses.push("#dueDate = :dueDate");
        names.insert("#dueDate".to_string(), "dueDate".to_string());
        values.insert(":dueDate".to_string(), AttributeValue::S(due_date.clone()));
    }
    if let Some(done) = update.done {
        clauses.push("#done = :done");
        names.insert("#done".to_string(), "done".to_string());
        values.insert(":done".to_string(), AttributeValue::Bool(done));
    }

    if clauses.is_empty() {
        return None;
    }

    values.insert(":userId".to_string(), AttributeValue::S(user_id.to_string()));

    Some(UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> TodoItem {
        TodoItem::new(
            "user-1",
            "550e8400-e29b-41d4-a716-446655440003",
            DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            "Buy milk",
            "2024-01-16",
        )
    }

    #[test]
    fn test_todo_round_trip() {
        let mut todo = sample_todo();
        todo.done = true;
        todo.attachment_url = Some("https://bucket.s3.amazonaws.com/x".to_string());

        let parsed = item_to_todo(&todo_to_item(&todo)).unwrap();

        assert_eq!(parsed, todo);
    }

    #[test]
    fn test_todo_item_has_correct_keys() {
        let item = todo_to_item(&sample_todo());

        assert_eq!(
            item.get("PK").unwrap().as_s().unwrap(),
            "TODO#550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(
            item.get("SK").unwrap().as_s().unwrap(),
            "TODO#550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(item.get("GSI1PK").unwrap().as_s().unwrap(), "USER#user-1");
        assert!(item
            .get("GSI1SK")
            .unwrap()
            .as_s()
            .unwrap()
            .starts_with("TODO#2024-01-15T10:30:00"));
        assert_eq!(item.get("entityType").unwrap().as_s().unwrap(), "TODO");
        assert_eq!(item.get("done").unwrap().as_bool().unwrap(), &false);
    }

    #[test]
    fn test_todo_without_attachment_omits_attribute() {
        let item = todo_to_item(&sample_todo());
        assert!(!item.contains_key("attachmentUrl"));
    }

    #[test]
    fn test_empty_attachment_url_reads_as_none() {
        let mut item = todo_to_item(&sample_todo());
        item.insert(
            "attachmentUrl".to_string(),
            AttributeValue::S(String::new()),
        );

        let parsed = item_to_todo(&item).unwrap();
        assert!(parsed.attachment_url.is_none());
    }

    #[test]
    fn test_missing_done_is_invalid_data() {
        let mut item = todo_to_item(&sample_todo());
        item.remove("done");

        assert!(matches!(
            item_to_todo(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_has_recorded_attachment() {
        let mut todo = sample_todo();
        assert!(!has_recorded_attachment(Some(&todo_to_item(&todo)), "user-1"));

        todo.attachment_url = Some("https://bucket.s3.amazonaws.com/x".to_string());
        let item = todo_to_item(&todo);
        assert!(has_recorded_attachment(Some(&item), "user-1"));
        assert!(!has_recorded_attachment(Some(&item), "user-2"));
        assert!(!has_recorded_attachment(None, "user-1"));
    }

    #[test]
    fn test_empty_attachment_url_is_not_recorded() {
        let mut item = todo_to_item(&sample_todo());
        item.insert(
            "attachmentUrl".to_string(),
            AttributeValue::S(String::new()),
        );

        assert!(!has_recorded_attachment(Some(&item), "user-1"));
    }

    #[test]
    fn test_update_expression_only_sets_present_fields() {
        let update = TodoUpdate {
            done: Some(true),
            ..Default::default()
        };

        let expr = todo_update_expression(&update, "user-1").unwrap();

        assert_eq!(expr.expression, "SET #done = :done");
        assert_eq!(expr.names.len(), 1);
        assert_eq!(expr.values.get(":done"), Some(&AttributeValue::Bool(true)));
        assert_eq!(
            expr.values.get(":userId"),
            Some(&AttributeValue::S("user-1".to_string()))
        );
    }

    #[test]
    fn test_update_expression_all_fields() {
        let update = TodoUpdate {
            name: Some("Buy oat milk".to_string()),
            due_date: Some("2024-02-01".to_string()),
            done: Some(false),
        };

        let expr = todo_update_expression(&update, "user-1").unwrap();

        assert_eq!(
            expr.expression,
            "SET #name = :name, #dueDate = :dueDate, #done = :done"
        );
        assert_eq!(expr.names.get("#name").map(String::as_str), Some("name"));
    }

    #[test]
    fn test_update_expression_empty() {
        assert!(todo_update_expression(&TodoUpdate::default(), "user-1").is_none());
    }

    #[test]
    fn test_get_string_missing_field() {
        let item = HashMap::new();
        assert!(get_string(&item, "missing").is_err());
    }
}
