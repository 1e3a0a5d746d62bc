use sea_orm::EntityTrait;

use crate::config::QueryableConfig;
use crate::join::apply_joins;
use crate::models::ParameterSource;
use crate::query::QueryTarget;
use crate::relation::RelationGraph;
use crate::search::{SearchRequest, apply_search};
use crate::sort::{OrderRequest, apply_order_by};

/// A Sea-ORM entity with searchable columns, joins and relations.
///
/// ```rust,ignore
/// impl Queryable for post::Entity {
///     fn queryable_config() -> QueryableConfig {
///         QueryableConfig::new()
///             .with_columns(["posts.title", "users.name"])
///             .join("users", "posts.user_id", "users.id")
///     }
/// }
/// ```
pub trait Queryable: EntityTrait + RelationGraph {
    fn queryable_config() -> QueryableConfig;
}

/// Add search and ordering to `query`.
///
/// Joins from `config` are applied before each requested step and never
/// duplicated. With neither `search` nor `order` the query comes back as it
/// went in, without joins.
pub fn http_query<Q, E>(
    mut query: Q,
    entity: &E,
    config: &QueryableConfig,
    search: Option<&SearchRequest>,
    order: Option<&OrderRequest>,
) -> Q
where
    Q: QueryTarget,
    E: RelationGraph + ?Sized,
{
    if let Some(search) = search {
        apply_joins(&mut query, &config.joins);
        apply_search(&mut query, &config.columns, &search.term, search.field_filter());
    }

    if let Some(order) = order {
        apply_joins(&mut query, &config.joins);
        apply_order_by(&mut query, entity, &order.key, &order.direction);
    }

    query
}

/// [`http_query`] with the search and order requests read from `params`.
pub fn apply_params<Q, E, P>(query: Q, entity: &E, config: &QueryableConfig, params: &P) -> Q
where
    Q: QueryTarget,
    E: RelationGraph + ?Sized,
    P: ParameterSource + ?Sized,
{
    let search = SearchRequest::from_params(params);
    let order = OrderRequest::from_params(params);
    tracing::debug!(
        table = entity.table(),
        search = search.as_ref().map(|search| search.term.as_str()),
        order_by = order.as_ref().map(|order| order.key.as_str()),
        "Applying query parameters"
    );
    http_query(query, entity, config, search.as_ref(), order.as_ref())
}
