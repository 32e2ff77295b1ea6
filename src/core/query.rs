//! Query parameters for listing todos
//!
//! A request's query string is kept as an ordered multi-valued map so that
//! repeated keys (`contains=a&contains=b`) survive intact. The typed
//! parameter values (`status`, `orderBy`, `limit`) are parsed here.

use indexmap::IndexMap;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::core::error::QueryError;
use crate::core::todo::Todo;

/// The query parameters the list operation understands
///
/// Any other parameter name is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryParameter {
    Category,
    Owner,
    Contains,
    Status,
    OrderBy,
    Limit,
}

impl QueryParameter {
    /// Name of the parameter as it appears in the query string
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryParameter::Category => "category",
            QueryParameter::Owner => "owner",
            QueryParameter::Contains => "contains",
            QueryParameter::Status => "status",
            QueryParameter::OrderBy => "orderBy",
            QueryParameter::Limit => "limit",
        }
    }
}

/// Multi-valued query parameters
///
/// # Example
/// ```rust,ignore
/// let params = QueryParams::from_pairs([
///     ("contains", " eu "),
///     ("contains", " et "),
///     ("limit", "5"),
/// ]);
/// assert_eq!(params.all("contains").len(), 2);
/// assert_eq!(params.first("limit"), Some("5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: IndexMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs, keeping repeated names in order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (name, value) in pairs {
            params.append(name, value);
        }
        params
    }

    /// Add one more value for `name`
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value supplied for `name`
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values supplied for `name`, in request order
    pub fn all(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First value of a recognized parameter
    pub fn get(&self, parameter: QueryParameter) -> Option<&str> {
        self.first(parameter.as_str())
    }

    /// All values of a recognized parameter
    pub fn get_all(&self, parameter: QueryParameter) -> &[String] {
        self.all(parameter.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Completion state requested by `status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Complete,
    Incomplete,
}

impl StatusFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            StatusFilter::Complete => todo.completed,
            StatusFilter::Incomplete => !todo.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(StatusFilter::Complete),
            "incomplete" => Ok(StatusFilter::Incomplete),
            other => Err(QueryError::invalid(QueryParameter::Status, other)),
        }
    }
}

/// Attribute accepted by `orderBy`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAttribute {
    Category,
    Body,
    Status,
    Owner,
}

impl SortAttribute {
    /// Ascending comparison on this attribute (`false` sorts before `true`)
    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        match self {
            SortAttribute::Category => a.category.cmp(&b.category),
            SortAttribute::Body => a.body.cmp(&b.body),
            SortAttribute::Status => a.completed.cmp(&b.completed),
            SortAttribute::Owner => a.owner.cmp(&b.owner),
        }
    }
}

impl FromStr for SortAttribute {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(SortAttribute::Category),
            "body" => Ok(SortAttribute::Body),
            "status" => Ok(SortAttribute::Status),
            "owner" => Ok(SortAttribute::Owner),
            other => Err(QueryError::invalid(QueryParameter::OrderBy, other)),
        }
    }
}

/// Parse a `limit` value as a non-negative integer
pub fn parse_limit(value: &str) -> Result<usize, QueryError> {
    value
        .parse::<usize>()
        .map_err(|_| QueryError::invalid(QueryParameter::Limit, value))
}
