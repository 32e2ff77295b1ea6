//! Core module containing the record type, the query pipeline and errors

pub mod error;
pub mod pipeline;
pub mod query;
pub mod service;
pub mod todo;

pub use error::{
    ConfigError, DataLoadError, ErrorResponse, QueryError, TodoError, TodoResult,
};
pub use query::{QueryParameter, QueryParams, SortAttribute, StatusFilter};
pub use service::TodoService;
pub use todo::Todo;
