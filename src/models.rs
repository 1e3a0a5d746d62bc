use serde::Deserialize;
use std::collections::HashMap;
use utoipa::{IntoParams, ToSchema};

pub(crate) const SEARCH_PARAM: &str = "search";
pub(crate) const SEARCH_FIELDS_PARAMS: [&str; 2] = ["searchFields", "search_fields"];
pub(crate) const ORDER_BY_PARAM: &str = "order_by";
pub(crate) const SORT_BY_PARAM: &str = "sort_by";

/// Named request parameters, looked up one at a time.
pub trait ParameterSource {
    fn get(&self, name: &str) -> Option<String>;
}

impl ParameterSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<K, V> ParameterSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref().to_string())
    }
}

/// Query parameters for searching and ordering resources.
///
/// # Searching
/// `search` matches every configured column with `LIKE '%term%'`:
/// ```text
/// GET /posts?search=rust
/// ```
/// `searchFields` (or `search_fields`) narrows the configured columns,
/// comma-separated:
/// ```text
/// GET /posts?search=rust&searchFields=posts.title
/// ```
///
/// # Ordering
/// `order_by` takes a column or a dotted relation path, `sort_by` the
/// direction (`asc` when omitted):
/// ```text
/// GET /posts?order_by=author.country.name&sort_by=desc
/// ```
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct QueryParams {
    /// Text searched for in the configured columns.
    ///
    /// Example: `rust`
    #[param(example = "rust")]
    pub search: Option<String>,
    /// Comma-separated subset of the configured columns to search.
    ///
    /// Example: `posts.title,users.name`
    #[serde(alias = "searchFields")]
    #[param(example = "posts.title,users.name")]
    pub search_fields: Option<String>,
    /// Column or dotted relation path to order by.
    ///
    /// Example: `author.name`
    #[param(example = "author.name")]
    pub order_by: Option<String>,
    /// Sort direction, `asc` or `desc`.
    ///
    /// Example: `desc`
    #[param(example = "desc")]
    pub sort_by: Option<String>,
}

impl ParameterSource for QueryParams {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            SEARCH_PARAM => self.search.clone(),
            "searchFields" | "search_fields" => self.search_fields.clone(),
            ORDER_BY_PARAM => self.order_by.clone(),
            SORT_BY_PARAM => self.sort_by.clone(),
            _ => None,
        }
    }
}
