use serde::{Deserialize, Serialize};
use serde_with::{Map, serde_as};

/// Join predicate `local = foreign`, both fully-qualified columns.
///
/// Serialized as a two-element array: `["posts.user_id", "users.id"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinOn(pub String, pub String);

impl JoinOn {
    pub fn new(local: impl Into<String>, foreign: impl Into<String>) -> Self {
        Self(local.into(), foreign.into())
    }

    #[must_use]
    pub fn local(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn foreign(&self) -> &str {
        &self.1
    }
}

/// Static search/sort configuration of one entity type.
///
/// - `columns`: fully-qualified columns searched by `?search=`, in order.
/// - `joins`: tables joined before searching or ordering, applied in
///   declaration order. Table names are unique.
///
/// JSON form:
///
/// ```json
/// {
///     "columns": ["posts.title", "users.name"],
///     "joins": { "users": ["posts.user_id", "users.id"] }
/// }
/// ```
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryableConfig {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde_as(as = "Map<_, _>")]
    #[serde(default)]
    pub joins: Vec<(String, JoinOn)>,
}

impl QueryableConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one searchable column.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Add several searchable columns, keeping their order.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Declare `INNER JOIN table ON local = foreign`.
    ///
    /// Declaring the same table again replaces its predicate but keeps the
    /// position of the first declaration.
    #[must_use]
    pub fn join(
        mut self,
        table: impl Into<String>,
        local: impl Into<String>,
        foreign: impl Into<String>,
    ) -> Self {
        let table = table.into();
        let on = JoinOn::new(local, foreign);
        match self.joins.iter_mut().find(|(name, _)| *name == table) {
            Some((_, existing)) => *existing = on,
            None => self.joins.push((table, on)),
        }
        self
    }

    /// Parse the JSON form.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document does not match the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.joins.is_empty()
    }
}
