//! DynamoDB repository implementation.
//!
//! Implements `TodoRepository` from `todos_core::storage` on a single table
//! keyed by `TODO#<todoId>`, with a secondary index listing items per owner.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValuesOnConditionCheckFailure};
use aws_sdk_dynamodb::Client;

use todos_core::storage::{Result, TodoRepository};
use todos_core::todo::{TodoItem, TodoUpdate};

use super::conversions::{
    item_to_todo, todo_to_item, todo_update_expression, ATTACHMENT_FREE_CONDITION,
    OWNED_ITEM_CONDITION,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_set_attachment_error, map_update_item_error,
};
use super::keys;

/// DynamoDB-based todo repository.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    owner_index: String,
}

impl DynamoDbRepository {
    /// Creates a new repository over `table_name`, listing through `owner_index`.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        owner_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            owner_index: owner_index.into(),
        }
    }

    /// Creates a repository using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>, owner_index: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name, owner_index)
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn list_todos(&self, user_id: &str) -> Result<Vec<TodoItem>> {
        let mut todos = Vec::new();
        let mut start_key = None;

        // Query pages are capped at 1 MB; follow LastEvaluatedKey to the end.
        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(&self.owner_index)
                .key_condition_expression("GSI1PK = :pk")
                .expression_attribute_values(":pk", AttributeValue::S(keys::todo_gsi1_pk(user_id)))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items() {
                todos.push(item_to_todo(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(user_id = %user_id, count = todos.len(), "Queried todos by owner");
        Ok(todos)
    }

    async fn get_todo(&self, todo_id: &str) -> Result<Option<TodoItem>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(todo_id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        result.item.as_ref().map(item_to_todo).transpose()
    }

    async fn create_todo(&self, item: &TodoItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(item)))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &item.todo_id))?;

        Ok(())
    }

    async fn update_todo(&self, todo_id: &str, user_id: &str, update: &TodoUpdate) -> Result<()> {
        let Some(expr) = todo_update_expression(update, user_id) else {
            return Ok(());
        };

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(todo_id)))
            .update_expression(expr.expression)
            .set_expression_attribute_names(Some(expr.names))
            .set_expression_attribute_values(Some(expr.values))
            .condition_expression(OWNED_ITEM_CONDITION)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, todo_id))?;

        Ok(())
    }

    async fn set_attachment_url(&self, todo_id: &str, user_id: &str, url: &str) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(todo_id)))
            .update_expression("SET attachmentUrl = :attachmentUrl")
            .expression_attribute_values(":attachmentUrl", AttributeValue::S(url.to_string()))
            .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
            .expression_attribute_values(":empty", AttributeValue::S(String::new()))
            .condition_expression(ATTACHMENT_FREE_CONDITION)
            .return_values_on_condition_check_failure(ReturnValuesOnConditionCheckFailure::AllOld)
            .send()
            .await
            .map_err(|e| map_set_attachment_error(e, todo_id, user_id))?;

        Ok(())
    }

    async fn delete_todo(&self, todo_id: &str, user_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::todo_pk(todo_id)))
            .key("SK", AttributeValue::S(keys::todo_sk(todo_id)))
            .expression_attribute_values(":userId", AttributeValue::S(user_id.to_string()))
            .condition_expression(OWNED_ITEM_CONDITION)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, todo_id))?;

        Ok(())
    }
}
