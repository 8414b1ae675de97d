use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tracing::error;

use crate::catalog::Selector;
use crate::errors::{AppError, AppResult, CatalogError};
use crate::models::Channel;
use crate::web::{extractors::ChannelsParams, AppState};

/// Channels from a static per-category file
pub async fn get_legacy_category_channels(
    Query(params): Query<ChannelsParams>,
    State(state): State<AppState>,
) -> AppResult<Json<Arc<Vec<Channel>>>> {
    let category = params
        .category()
        .ok_or_else(|| AppError::parameter_missing("category"))?;

    match state.catalog.load(Selector::LegacyCategory(category)).await {
        Ok(channels) => Ok(Json(channels)),
        Err(CatalogError::NotFound { .. }) => Err(AppError::not_found("Category", category)),
        Err(e @ CatalogError::InvalidSelector { .. }) => Err(e.into()),
        Err(e) => {
            error!("Error reading category file '{}': {}", category, e);
            Err(AppError::internal("Internal server error"))
        }
    }
}
