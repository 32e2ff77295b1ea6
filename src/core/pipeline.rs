//! Filter, sort and limit pipeline for listing todos
//!
//! Every recognized parameter maps to one stage. Stages run in the order of
//! [`PIPELINE`], each taking the sequence produced by the previous one, so
//! `limit` always truncates the filtered and sorted result. A stage whose
//! parameter is absent passes its input through unchanged. A validating
//! stage that rejects its value stops the pipeline before any later stage
//! runs.
//!
//! Stages borrow from the store and never modify a record.

use crate::core::error::QueryError;
use crate::core::query::{QueryParameter, QueryParams, SortAttribute, StatusFilter, parse_limit};
use crate::core::todo::Todo;

/// Stage order
pub const PIPELINE: [QueryParameter; 6] = [
    QueryParameter::Category,
    QueryParameter::Owner,
    QueryParameter::Contains,
    QueryParameter::Status,
    QueryParameter::OrderBy,
    QueryParameter::Limit,
];

/// Run every stage of the pipeline over `records`
///
/// # Example
/// ```rust,ignore
/// let params = QueryParams::from_pairs([("status", "complete"), ("limit", "5")]);
/// let first_five_done = apply(store.all(), &params)?;
/// ```
pub fn apply<'a>(records: &'a [Todo], params: &QueryParams) -> Result<Vec<&'a Todo>, QueryError> {
    let todos: Vec<&Todo> = records.iter().collect();
    PIPELINE
        .iter()
        .try_fold(todos, |todos, parameter| run_stage(*parameter, todos, params))
}

fn run_stage<'a>(
    parameter: QueryParameter,
    todos: Vec<&'a Todo>,
    params: &QueryParams,
) -> Result<Vec<&'a Todo>, QueryError> {
    match (parameter, params.get(parameter)) {
        (QueryParameter::Contains, _) => Ok(filter_contains(todos, params.get_all(parameter))),
        (_, None) => Ok(todos),
        (QueryParameter::Category, Some(value)) => Ok(filter_category(todos, value)),
        (QueryParameter::Owner, Some(value)) => Ok(filter_owner(todos, value)),
        (QueryParameter::Status, Some(value)) => Ok(filter_status(todos, value.parse()?)),
        (QueryParameter::OrderBy, Some(value)) => Ok(sort_by(todos, value.parse()?)),
        (QueryParameter::Limit, Some(value)) => Ok(limit(todos, parse_limit(value)?)),
    }
}

/// Keep todos whose category equals `category`
pub fn filter_category<'a>(todos: Vec<&'a Todo>, category: &str) -> Vec<&'a Todo> {
    todos.into_iter().filter(|t| t.category == category).collect()
}

/// Keep todos whose owner equals `owner`
pub fn filter_owner<'a>(todos: Vec<&'a Todo>, owner: &str) -> Vec<&'a Todo> {
    todos.into_iter().filter(|t| t.owner == owner).collect()
}

/// Keep todos whose body contains every one of `needles` (case-sensitive)
pub fn filter_contains<'a>(todos: Vec<&'a Todo>, needles: &[String]) -> Vec<&'a Todo> {
    needles.iter().fold(todos, |todos, needle| {
        todos
            .into_iter()
            .filter(|t| t.body.contains(needle.as_str()))
            .collect()
    })
}

pub fn filter_status<'a>(todos: Vec<&'a Todo>, status: StatusFilter) -> Vec<&'a Todo> {
    todos.into_iter().filter(|t| status.matches(t)).collect()
}

/// Stable ascending sort; ties keep their incoming order
pub fn sort_by(mut todos: Vec<&Todo>, attribute: SortAttribute) -> Vec<&Todo> {
    todos.sort_by(|a, b| attribute.compare(a, b));
    todos
}

pub fn limit(mut todos: Vec<&Todo>, max: usize) -> Vec<&Todo> {
    todos.truncate(max);
    todos
}
