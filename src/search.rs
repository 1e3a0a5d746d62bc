use sea_orm::sea_query::{Condition, Expr};

use crate::models::{ParameterSource, SEARCH_FIELDS_PARAMS, SEARCH_PARAM};
use crate::query::{QueryTarget, column_ref};

/// `?search=term&searchFields=a,b`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    /// Restricts the configured columns. `None` or empty means all of them.
    pub field_filter: Option<Vec<String>>,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            field_filter: None,
        }
    }

    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_filter = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Read `search` and `searchFields` (or `search_fields`) from a request.
    ///
    /// Returns `None` when `search` is absent or blank. The field list is
    /// comma-separated; blank items are dropped.
    pub fn from_params<P>(params: &P) -> Option<Self>
    where
        P: ParameterSource + ?Sized,
    {
        let term = params.get(SEARCH_PARAM).filter(|term| !term.trim().is_empty())?;
        let field_filter = SEARCH_FIELDS_PARAMS
            .iter()
            .find_map(|name| params.get(name))
            .map(|fields| parse_field_list(&fields));

        Some(Self { term, field_filter })
    }

    pub fn field_filter(&self) -> Option<&[String]> {
        self.field_filter.as_deref()
    }
}

fn parse_field_list(fields: &str) -> Vec<String> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Columns to search: `columns`, narrowed to `field_filter` when that is
/// non-empty. Configuration order wins over filter order.
pub fn effective_columns<'a>(columns: &'a [String], field_filter: Option<&[String]>) -> Vec<&'a str> {
    match field_filter {
        Some(filter) if !filter.is_empty() => columns
            .iter()
            .filter(|column| filter.contains(*column))
            .map(String::as_str)
            .collect(),
        _ => columns.iter().map(String::as_str).collect(),
    }
}

/// `(c1 LIKE '%term%' OR c2 LIKE '%term%' ...)`, or `None` without columns.
///
/// `%` and `_` inside `term` are not escaped and keep their LIKE meaning.
/// The term itself is bound as a value.
pub fn build_search_condition<S>(columns: &[S], term: &str) -> Option<Condition>
where
    S: AsRef<str>,
{
    if columns.is_empty() {
        return None;
    }

    let pattern = format!("%{term}%");
    let condition = columns.iter().fold(Condition::any(), |condition, column| {
        condition.add(Expr::col(column_ref(column.as_ref())).like(pattern.as_str()))
    });
    Some(condition)
}

/// AND the search group onto `query`. A search with no effective columns
/// leaves the query untouched.
pub fn apply_search<Q>(query: &mut Q, columns: &[String], term: &str, field_filter: Option<&[String]>)
where
    Q: QueryTarget + ?Sized,
{
    let effective = effective_columns(columns, field_filter);
    match build_search_condition(&effective, term) {
        Some(condition) => query.and_condition(condition),
        None => tracing::debug!(
            term,
            ?field_filter,
            "No searchable columns left after filtering, skipping search"
        ),
    }
}
