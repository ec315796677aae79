//! Todo CRUD and attachment handlers.
//!
//! Every handler takes the caller from [`CurrentUser`] and delegates to the
//! todo service; ownership and validation live there.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use todos_core::todo::{CreateTodoRequest, TodoItem, UpdateTodoRequest};

use crate::{auth::CurrentUser, handlers::AppError, state::AppState};

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item: TodoItem,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
}

/// List the caller's todos (GET /api/todos).
pub async fn list_todos(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse>, AppError> {
    let items = state.service.list_todos(&user_id).await?;
    Ok(Json(ItemsResponse { items }))
}

/// Create a todo (POST /api/todos).
pub async fn create_todo(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let Json(request) = payload?;
    let item = state.service.create_todo(&user_id, request).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse { item })))
}

/// Get a single todo (GET /api/todos/{todo_id}).
pub async fn get_todo(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = state.service.get_todo(&user_id, &todo_id).await?;
    Ok(Json(ItemResponse { item }))
}

/// Partially update a todo (PATCH /api/todos/{todo_id}).
pub async fn update_todo(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;
    state
        .service
        .update_todo(&user_id, &todo_id, request)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a todo (DELETE /api/todos/{todo_id}).
pub async fn delete_todo(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.service.delete_todo(&user_id, &todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Request an attachment upload URL (POST /api/todos/{todo_id}/attachment).
pub async fn request_attachment_upload(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<Json<UploadUrlResponse>, AppError> {
    let upload_url = state
        .service
        .request_attachment_upload(&user_id, &todo_id)
        .await?;
    Ok(Json(UploadUrlResponse { upload_url }))
}
