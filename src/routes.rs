use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;

use crate::augment::{Queryable, apply_params};
use crate::errors::ApiError;
use crate::models::QueryParams;
use crate::query::HttpQuery;

/// List all rows of `E`, searched and ordered by the request's query string.
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/posts", get(get_all::<post::Entity>))
///     .with_state(db);
/// ```
///
/// # Errors
///
/// `400` when the query string cannot be deserialized, `500` when the
/// database rejects the augmented query.
pub async fn get_all<E>(
    State(db): State<DatabaseConnection>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<Vec<E::Model>>, ApiError>
where
    E: Queryable,
    E::Model: Serialize,
{
    let Query(params) = params.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let query = apply_params(
        HttpQuery::new(E::find()),
        &E::default(),
        &E::queryable_config(),
        &params,
    );
    let items = query.into_select().all(&db).await?;

    Ok(Json(items))
}
