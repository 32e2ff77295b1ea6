//! Router builder utilities for todo routes

use crate::api::{AppState, get_todo, list_todos};
use axum::{Router, routing::get};

/// Build the todo routes
///
/// - GET /todos - List todos (filter, sort and limit via query string)
/// - GET /todos/{id} - Get a specific todo by ID
pub fn build_todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo))
        .with_state(state)
}

/// Mount `routes` under `prefix`
///
/// A root prefix (`/`) merges instead of nesting.
pub fn mount(app: Router, prefix: &str, routes: Router) -> Router {
    if prefix == "/" {
        app.merge(routes)
    } else {
        app.nest(prefix, routes)
    }
}
