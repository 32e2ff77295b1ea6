//! In-memory todo store loaded once from a JSON data source

use crate::core::error::{DataLoadError, TodoError, TodoResult};
use crate::core::pipeline;
use crate::core::{QueryParams, Todo, TodoService};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Immutable snapshot of the todo collection
///
/// Todos are kept in load order. An identifier index is built once during
/// loading; nothing is inserted or removed afterwards, so the store can be
/// shared behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    todos: Vec<Todo>,
    index: HashMap<String, usize>,
}

impl InMemoryTodoStore {
    /// Build a store from already-decoded todos
    ///
    /// Fails if two todos share an identifier.
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, DataLoadError> {
        let mut index = HashMap::with_capacity(todos.len());
        for (position, todo) in todos.iter().enumerate() {
            if index.insert(todo.id.clone(), position).is_some() {
                tracing::warn!(id = %todo.id, "duplicate todo id in data source");
                return Err(DataLoadError::DuplicateId {
                    id: todo.id.clone(),
                });
            }
        }

        Ok(Self { todos, index })
    }

    /// Load from a reader producing a JSON array of todos
    pub fn from_reader(reader: impl Read, source: &str) -> Result<Self, DataLoadError> {
        let todos: Vec<Todo> =
            serde_json::from_reader(reader).map_err(|e| DataLoadError::Parse {
                source: source.to_string(),
                message: e.to_string(),
            })?;
        let store = Self::from_todos(todos)?;
        tracing::info!(source, count = store.size(), "loaded todos");
        Ok(store)
    }

    /// Load from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, DataLoadError> {
        Self::from_reader(json.as_bytes(), "<inline>")
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|e| DataLoadError::Io {
            source: source.clone(),
            message: e.to_string(),
        })?;
        Self::from_reader(std::io::BufReader::new(file), &source)
    }

    /// Number of todos held
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Every todo, in load order
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    /// Exact lookup by identifier
    pub fn by_id(&self, id: &str) -> Option<&Todo> {
        self.index.get(id).map(|&position| &self.todos[position])
    }
}

impl TodoService for InMemoryTodoStore {
    fn list_todos(&self, params: &QueryParams) -> TodoResult<Vec<Todo>> {
        let todos = pipeline::apply(self.all(), params)?;
        Ok(todos.into_iter().cloned().collect())
    }

    fn get_todo(&self, id: &str) -> TodoResult<Todo> {
        self.by_id(id).cloned().ok_or_else(|| TodoError::NotFound { id: id.to_string() })
    }

    fn count(&self) -> usize {
        self.size()
    }
}
