//! HTTP handlers for todo operations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use crate::core::{QueryParams, Todo, TodoError, TodoService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn TodoService>,
}

/// List todos, filtered, sorted and limited by the query string
///
/// Repeated keys are kept, so `?contains=a&contains=b` reaches the pipeline
/// with both values.
///
/// GET /api/todos?owner=Blanche&status=complete&orderBy=category&limit=12
pub async fn list_todos(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Todo>>, TodoError> {
    let params = QueryParams::from_pairs(pairs);

    let todos = state.service.list_todos(&params).inspect_err(|e| {
        tracing::debug!(?params, error = %e, "rejected todo query");
    })?;

    tracing::debug!(?params, count = todos.len(), "listed todos");
    Ok(Json(todos))
}

/// Get a single todo
///
/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    let todo = state.service.get_todo(&id).inspect_err(|_| {
        tracing::debug!(%id, "todo not found");
    })?;

    Ok(Json(todo))
}
