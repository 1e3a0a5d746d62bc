use sea_orm::sea_query::Order;

use crate::models::{ORDER_BY_PARAM, ParameterSource, SORT_BY_PARAM};
use crate::query::QueryTarget;
use crate::relation::{RelationGraph, resolve_column};

const DEFAULT_SORT_ORDER: &str = "asc";

/// `?order_by=author.name&sort_by=desc`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Dotted path, e.g. `author.country.name`.
    pub key: String,
    /// Direction as given by the caller; see [`SortDirection::parse`].
    pub direction: String,
}

impl OrderRequest {
    pub fn new(key: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: direction.into(),
        }
    }

    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, DEFAULT_SORT_ORDER)
    }

    /// Read `order_by` and `sort_by` from a request. `sort_by` defaults to
    /// `asc`; a missing or blank `order_by` yields `None`.
    pub fn from_params<P>(params: &P) -> Option<Self>
    where
        P: ParameterSource + ?Sized,
    {
        let key = params.get(ORDER_BY_PARAM).filter(|key| !key.trim().is_empty())?;
        let direction = params
            .get(SORT_BY_PARAM)
            .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_string());
        Some(Self { key, direction })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive `asc`/`desc`. Anything else sorts ascending.
    #[must_use]
    pub fn parse(direction: &str) -> Self {
        let direction = direction.trim();
        if direction.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            if !direction.eq_ignore_ascii_case("asc") {
                tracing::debug!(direction, "Unrecognised sort direction, using ascending");
            }
            Self::Asc
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// Resolve `key` against `entity` and append one ORDER BY term.
pub fn apply_order_by<Q, E>(query: &mut Q, entity: &E, key: &str, direction: &str)
where
    Q: QueryTarget + ?Sized,
    E: RelationGraph + ?Sized,
{
    let column = resolve_column(entity, key);
    let direction = SortDirection::parse(direction);
    tracing::trace!(key, column = %column, direction = direction.as_str(), "Applying order");
    query.order_by_column(&column, direction.into());
}
