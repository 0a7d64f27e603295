use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json,
};

use super::error::ApiError;
use super::extract::{JsonBody, TodoIdPath};
use crate::models::*;
use crate::store::TodoStore;

// ============================================================
// Todos
// ============================================================

/// An empty list is answered with 404 rather than `[]`.
pub async fn list_todos(State(store): State<TodoStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = store.list();
    if todos.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(todos))
}

pub async fn get_todo(
    State(store): State<TodoStore>,
    TodoIdPath(id): TodoIdPath,
) -> Result<Json<Todo>, ApiError> {
    Ok(Json(store.get(id)?))
}

pub async fn create_todo(
    State(store): State<TodoStore>,
    JsonBody(input): JsonBody<CreateTodoInput>,
) -> (StatusCode, Json<CreatedTodo>) {
    let id = store.create(input);
    (StatusCode::CREATED, Json(CreatedTodo { id }))
}

pub async fn update_todo(
    State(store): State<TodoStore>,
    TodoIdPath(id): TodoIdPath,
    JsonBody(input): JsonBody<UpdateTodoInput>,
) -> Result<&'static str, ApiError> {
    store.update(id, input)?;
    Ok("OK")
}

pub async fn delete_todo(
    State(store): State<TodoStore>,
    TodoIdPath(id): TodoIdPath,
) -> Result<&'static str, ApiError> {
    store.delete(id)?;
    Ok("OK")
}

// ============================================================
// Fallback
// ============================================================

/// Any route or method not listed above.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri);
    ApiError::NotFound
}
