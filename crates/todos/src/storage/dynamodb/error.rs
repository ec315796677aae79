//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `todos_core::storage`.
//! Transport failures and throttling become `ConnectionFailed` (503); a
//! failed write condition becomes `NotFound` or `AlreadyExists`; anything
//! else is a `QueryFailed` (500).

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use todos_core::storage::RepositoryError;

use super::conversions::has_recorded_attachment;

pub const ENTITY_TODO: &str = "TodoItem";
pub const ENTITY_ATTACHMENT: &str = "Attachment";

const THROTTLED: &str = "DynamoDB throttled the request, please retry";

/// Returns `Some` when the request never produced a service response.
fn transport_failure<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::DispatchFailure(_) => Some(RepositoryError::ConnectionFailed(
            "DynamoDB unreachable: dispatch failure".to_string(),
        )),
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(
            "DynamoDB unreachable: request timed out".to_string(),
        )),
        _ => None,
    }
}

fn not_found(id: String) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: ENTITY_TODO,
        id,
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        GetItemError::ProvisionedThroughputExceededException(_)
        | GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::ConnectionFailed(THROTTLED.to_string())
        }
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        QueryError::ProvisionedThroughputExceededException(_)
        | QueryError::RequestLimitExceeded(_) => {
            RepositoryError::ConnectionFailed(THROTTLED.to_string())
        }
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table or index not found".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// Creates are conditioned on `attribute_not_exists(PK)`, so a failed
/// condition means the ID is taken.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => RepositoryError::AlreadyExists {
            entity_type: ENTITY_TODO,
            id: id.into(),
        },
        PutItemError::ProvisionedThroughputExceededException(_)
        | PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::ConnectionFailed(THROTTLED.to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// A failed `attribute_exists(PK) AND userId = :userId` condition means the
/// item is missing or belongs to someone else.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    update_service_error(err.into_service_error(), id.into())
}

fn update_service_error(err: UpdateItemError, id: String) -> RepositoryError {
    match err {
        UpdateItemError::ConditionalCheckFailedException(_) => not_found(id),
        UpdateItemError::ProvisionedThroughputExceededException(_)
        | UpdateItemError::RequestLimitExceeded(_) => {
            RepositoryError::ConnectionFailed(THROTTLED.to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map the attachment UpdateItem error to RepositoryError.
///
/// The write returns the old item on a failed condition, which tells an
/// existing attachment (`AlreadyExists`) apart from a missing or foreign
/// item (`NotFound`).
pub fn map_set_attachment_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    todo_id: &str,
    user_id: &str,
) -> RepositoryError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(failed)
            if has_recorded_attachment(failed.item(), user_id) =>
        {
            RepositoryError::AlreadyExists {
                entity_type: ENTITY_ATTACHMENT,
                id: todo_id.to_string(),
            }
        }
        err => update_service_error(err, todo_id.to_string()),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => not_found(id.into()),
        DeleteItemError::ProvisionedThroughputExceededException(_)
        | DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::ConnectionFailed(THROTTLED.to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}
