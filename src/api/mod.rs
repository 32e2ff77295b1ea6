//! REST handlers for the todo routes

pub mod handlers;

pub use handlers::{AppState, get_todo, list_todos};
