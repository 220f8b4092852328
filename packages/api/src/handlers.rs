// ABOUTME: HTTP request handlers for todo item operations
// ABOUTME: Decodes JSON bodies, invokes the domain core, and maps errors at the boundary

use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use tracing::info;

use crate::decode::decode_item;
use crate::response::{decode_error_response, error_response};
use crate::AppState;

/// List all non-deleted todo items, most recently created first
pub async fn list_todos(State(state): State<AppState>) -> Response {
    info!("listing todo items");

    match state.todos.get_all().await {
        Ok(items) => (StatusCode::OK, ResponseJson(items)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Fetching a single item is not wired up; the list endpoint covers current use
pub async fn get_todo(Path(id): Path<String>) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        ResponseJson(serde_json::json!({
            "hello": format!("{id} but this method isn't implemented for this demo as it's currently unused")
        })),
    )
        .into_response()
}

/// Create a new todo item
pub async fn create_todo(State(state): State<AppState>, body: Body) -> Response {
    let item = match decode_item(body).await {
        Ok(item) => item,
        Err(e) => return decode_error_response(e),
    };

    info!("creating todo item");

    match state.todos.create(item).await {
        Ok(created) => (StatusCode::CREATED, ResponseJson(created)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Apply a partial update to an existing todo item
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Body,
) -> Response {
    let item = match decode_item(body).await {
        Ok(item) => item,
        Err(e) => return decode_error_response(e),
    };

    info!("updating todo item: {}", id);

    match state.todos.update(item, &id).await {
        Ok(updated) => (StatusCode::OK, ResponseJson(updated)).into_response(),
        Err(e) => error_response(e),
    }
}
