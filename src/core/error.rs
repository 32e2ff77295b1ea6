//! Typed error handling for the todos service
//!
//! The hierarchy lets the REST layer map every failure to a precise HTTP
//! status and a stable error code without string matching.
//!
//! # Error Categories
//!
//! - [`DataLoadError`]: The todo data source could not be read or decoded
//! - [`QueryError`]: A recognized query parameter carried an invalid value
//! - [`ConfigError`]: Server configuration could not be loaded or validated
//! - [`TodoError::NotFound`]: A lookup by identifier found nothing
//!
//! # Example
//!
//! ```rust,ignore
//! use todos::prelude::*;
//!
//! match service.get_todo("58895985c2fc014023fbc272") {
//!     Ok(todo) => println!("Found: {}", todo.body),
//!     Err(TodoError::NotFound { id }) => println!("No todo {}", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use crate::core::query::QueryParameter;

/// The main error type for the todos service
#[derive(Debug)]
pub enum TodoError {
    /// Loading the todo collection failed
    DataLoad(DataLoadError),

    /// A query parameter was rejected
    Query(QueryError),

    /// No todo has the requested identifier
    NotFound { id: String },

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoError::DataLoad(e) => write!(f, "{}", e),
            TodoError::Query(e) => write!(f, "{}", e),
            TodoError::NotFound { id } => write!(f, "No todo with id {} was found.", id),
            TodoError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TodoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TodoError::DataLoad(e) => Some(e),
            TodoError::Query(e) => Some(e),
            TodoError::Config(e) => Some(e),
            TodoError::NotFound { .. } => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl TodoError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::DataLoad(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TodoError::Query(e) => e.status_code(),
            TodoError::NotFound { .. } => StatusCode::NOT_FOUND,
            TodoError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            TodoError::DataLoad(e) => e.error_code(),
            TodoError::Query(e) => e.error_code(),
            TodoError::NotFound { .. } => "TODO_NOT_FOUND",
            TodoError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            TodoError::Query(QueryError::InvalidParameter { parameter, value }) => {
                Some(serde_json::json!({
                    "parameter": parameter.as_str(),
                    "value": value
                }))
            }
            TodoError::NotFound { id } => Some(serde_json::json!({ "id": id })),
            _ => None,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Data Load Errors
// =============================================================================

/// Errors raised while building the store from its data source
#[derive(Debug)]
pub enum DataLoadError {
    /// The source could not be read
    Io { source: String, message: String },

    /// The source is not a JSON array of todos
    Parse { source: String, message: String },

    /// Two records share an identifier
    DuplicateId { id: String },
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadError::Io { source, message } => {
                write!(f, "Failed to read todo data from '{}': {}", source, message)
            }
            DataLoadError::Parse { source, message } => {
                write!(f, "Malformed todo data in '{}': {}", source, message)
            }
            DataLoadError::DuplicateId { id } => {
                write!(f, "Duplicate todo id '{}' in data source", id)
            }
        }
    }
}

impl std::error::Error for DataLoadError {}

impl DataLoadError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DataLoadError::Io { .. } => "DATA_LOAD_IO_ERROR",
            DataLoadError::Parse { .. } => "DATA_LOAD_PARSE_ERROR",
            DataLoadError::DuplicateId { .. } => "DATA_LOAD_DUPLICATE_ID",
        }
    }
}

impl From<DataLoadError> for TodoError {
    fn from(err: DataLoadError) -> Self {
        TodoError::DataLoad(err)
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised by the query pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A recognized parameter received a value outside its domain
    InvalidParameter {
        parameter: QueryParameter,
        value: String,
    },
}

impl QueryError {
    pub fn invalid(parameter: QueryParameter, value: impl Into<String>) -> Self {
        QueryError::InvalidParameter {
            parameter,
            value: value.into(),
        }
    }

    /// The rejected parameter
    pub fn parameter(&self) -> QueryParameter {
        match self {
            QueryError::InvalidParameter { parameter, .. } => *parameter,
        }
    }

    /// The rejected value, exactly as supplied
    pub fn value(&self) -> &str {
        match self {
            QueryError::InvalidParameter { value, .. } => value,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn error_code(&self) -> &'static str {
        "INVALID_PARAMETER"
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let QueryError::InvalidParameter { parameter, value } = self;
        match parameter {
            QueryParameter::Status => write!(
                f,
                "Specified status '{}' is not 'complete' or 'incomplete'",
                value
            ),
            QueryParameter::OrderBy => write!(f, "Cannot sort by attribute '{}'", value),
            QueryParameter::Limit => {
                write!(f, "Specified limit '{}' can't be parsed to an integer", value)
            }
            other => write!(
                f,
                "Invalid value '{}' for parameter '{}'",
                value,
                other.as_str()
            ),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<QueryError> for TodoError {
    fn from(err: QueryError) -> Self {
        TodoError::Query(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file not found
    FileNotFound { path: String },

    /// Failed to read or parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A configuration value is out of range
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::ParseError { file, message } => match file {
                Some(file) => write!(f, "Failed to parse config file '{}': {}", file, message),
                None => write!(f, "Failed to parse config: {}", message),
            },
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for config field '{}': {}",
                    value, field, message
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for TodoError {
    fn from(err: ConfigError) -> Self {
        TodoError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for TodoError {
    fn from(err: serde_yaml::Error) -> Self {
        TodoError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for todos operations
pub type TodoResult<T> = Result<T, TodoError>;
