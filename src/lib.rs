//! # Todos
//!
//! A read-only REST query service over an in-memory collection of todos.
//!
//! ## Features
//!
//! - **Immutable Store**: The collection is loaded once from a JSON file and
//!   shared across requests without locking
//! - **Query Pipeline**: `category`, `owner`, `contains`, `status`, `orderBy`
//!   and `limit` compose in a fixed order
//! - **Typed Errors**: Invalid parameters map to 400, unknown ids to 404
//! - **Configuration**: YAML file plus `TODOS_*` environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use todos::prelude::*;
//!
//! let store = InMemoryTodoStore::from_file("data/todos.json")?;
//!
//! let params = QueryParams::from_pairs([
//!     ("owner", "Blanche"),
//!     ("status", "complete"),
//!     ("orderBy", "category"),
//!     ("limit", "12"),
//! ]);
//! let todos = store.list_todos(&params)?;
//!
//! ServerBuilder::new().with_store(store).serve().await?;
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, DataLoadError, ErrorResponse, QueryError, QueryParameter, QueryParams,
        SortAttribute, StatusFilter, Todo, TodoError, TodoResult, TodoService, pipeline,
    };

    // === Handlers ===
    pub use crate::api::{AppState, get_todo, list_todos};

    // === Storage ===
    pub use crate::storage::InMemoryTodoStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};
}
