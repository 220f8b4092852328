// ABOUTME: HTTP API surface for the todo service
// ABOUTME: Provides the router constructor, handlers, and error-to-response mapping

use std::sync::Arc;

use axum::{routing::get, Router};
use todo_items::Core;

pub mod decode;
pub mod handlers;
pub mod response;

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<Core>,
}

impl AppState {
    pub fn new(todos: Arc<Core>) -> Self {
        Self { todos }
    }
}

/// Creates the todo API router; mount it under the service prefix
pub fn create_todo_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_todos).post(handlers::create_todo))
        .route("/{id}", get(handlers::get_todo).patch(handlers::update_todo))
}
