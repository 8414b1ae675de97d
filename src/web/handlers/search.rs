use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, error};

use crate::errors::{AppResult, CatalogError};
use crate::filter::SearchQuery;
use crate::models::Channel;
use crate::web::{extractors::SearchParams, AppState};

/// Name search over the aggregate catalog
///
/// A blank query answers `[]` without touching the catalog. A catalog that
/// cannot be read also answers `[]`; only a catalog of the wrong shape is
/// reported as an error.
pub async fn search_channels(
    Query(params): Query<SearchParams>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Channel>>> {
    let Some(query) = SearchQuery::parse(params.q.as_deref()) else {
        return Ok(Json(Vec::new()));
    };

    match state.catalog.search(&query).await {
        Ok(channels) => {
            debug!("Search '{}' matched {} channels", query.as_str(), channels.len());
            Ok(Json(channels))
        }
        Err(e @ CatalogError::InvalidShape { .. }) => Err(e.into()),
        Err(e) => {
            error!("Search catalog unavailable, returning no results: {}", e);
            Ok(Json(Vec::new()))
        }
    }
}
