//! # queryable
//!
//! Relation-aware search and ordering for Sea-ORM queries.
//!
//! Given the parameters of an incoming request (`search`, `searchFields`,
//! `order_by`, `sort_by`) and a static per-entity [`QueryableConfig`], the
//! crate adds to a query:
//!
//! - the inner joins the configuration declares, never twice,
//! - one grouped `(a LIKE '%term%' OR b LIKE '%term%' ...)` predicate,
//!   ANDed with whatever is already in the WHERE clause,
//! - an `ORDER BY` on a dotted relation path such as `author.country.name`,
//!   resolved to `countries.name` by walking the entity's relations.
//!
//! ```rust,ignore
//! use queryable::{HttpQuery, QueryParams, apply_params};
//!
//! let params = QueryParams {
//!     order_by: Some("author.country.name".to_string()),
//!     sort_by: Some("desc".to_string()),
//!     ..Default::default()
//! };
//! let posts = apply_params(HttpQuery::new(post::Entity::find()), &post::Entity, &config, &params)
//!     .into_select()
//!     .all(&db)
//!     .await?;
//! ```

pub mod augment;
pub mod config;
pub mod errors;
pub mod join;
pub mod models;
pub mod query;
pub mod relation;
pub mod routes;
pub mod search;
pub mod sort;

pub use augment::{Queryable, apply_params, http_query};
pub use config::{JoinOn, QueryableConfig};
pub use errors::ApiError;
pub use join::{JoinOperation, apply_joins, plan_joins};
pub use models::{ParameterSource, QueryParams};
pub use query::{HttpQuery, QueryTarget};
pub use relation::{Relation, RelationGraph, RelationKind, resolve_column};
pub use search::{SearchRequest, apply_search, build_search_condition, effective_columns};
pub use sort::{OrderRequest, SortDirection, apply_order_by};
