//! Service trait backing the REST handlers

use crate::core::error::TodoResult;
use crate::core::query::QueryParams;
use crate::core::todo::Todo;

/// Read-only operations exposed to the transport layer
///
/// Implementations must be safe to share across request tasks. Neither
/// operation blocks or mutates state, so they are plain synchronous calls.
pub trait TodoService: Send + Sync {
    /// List todos matching `params`
    ///
    /// Fails with [`TodoError::Query`](crate::core::error::TodoError::Query)
    /// when a recognized parameter carries an invalid value.
    fn list_todos(&self, params: &QueryParams) -> TodoResult<Vec<Todo>>;

    /// Get a single todo by identifier
    ///
    /// Fails with [`TodoError::NotFound`](crate::core::error::TodoError::NotFound)
    /// when no todo has this identifier.
    fn get_todo(&self, id: &str) -> TodoResult<Todo>;

    /// Number of todos held
    fn count(&self) -> usize;
}
