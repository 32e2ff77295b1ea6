//! The todo record

use serde::{Deserialize, Serialize};

/// An individual todo
///
/// Records are created once, when the store is loaded, and are never
/// modified afterwards. The wire names follow the bundled data file:
/// the identifier is `_id` and the completion flag is `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque identifier, unique within the collection
    #[serde(rename = "_id")]
    pub id: String,

    /// Who the todo belongs to
    pub owner: String,

    /// `true` once the todo is done
    #[serde(rename = "status")]
    pub completed: bool,

    /// Free text describing the todo
    pub body: String,

    /// Category label (e.g., "homework", "software design")
    pub category: String,
}

impl Todo {
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        completed: bool,
        body: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            completed,
            body: body.into(),
            category: category.into(),
        }
    }
}
