//! Keyword-derived category endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error};

use crate::catalog::Selector;
use crate::errors::{AppError, AppResult};
use crate::filter::{Category, CategoryDescriptor};
use crate::models::Channel;
use crate::web::AppState;

pub async fn list_categories() -> Json<Vec<CategoryDescriptor>> {
    Json(Category::descriptors())
}

/// Channels of every country whose name matches the category keywords
pub async fn get_category_channels(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Arc<Vec<Channel>>>> {
    let category = Category::from_name(&name);
    if category == Category::All {
        debug!("Category '{}' has no keywords, serving every channel", name);
    }

    state
        .catalog
        .load(Selector::Category(category))
        .await
        .map(Json)
        .map_err(|e| {
            error!("Error loading category channels for '{}': {}", name, e);
            AppError::internal("Failed to load channels")
        })
}
