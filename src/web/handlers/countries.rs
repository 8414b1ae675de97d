//! Country endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::catalog::{loader::normalize_country_code, Selector};
use crate::errors::{AppError, AppResult, CatalogError};
use crate::models::{Channel, CountryInfo, CountrySummary};
use crate::web::AppState;

/// All known countries sorted by display name
pub async fn list_countries(State(state): State<AppState>) -> Json<Vec<CountrySummary>> {
    Json(state.catalog.countries().summaries())
}

/// Channels from one country file
///
/// Any read or parse failure, a missing file included, is reported as a 500.
pub async fn get_country_channels(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<Arc<Vec<Channel>>>> {
    match state.catalog.load(Selector::Country(&code)).await {
        Ok(channels) => {
            info!("Serving {} channels for country '{}'", channels.len(), code);
            Ok(Json(channels))
        }
        Err(e @ CatalogError::InvalidSelector { .. }) => Err(e.into()),
        Err(e) => {
            error!("Error loading country channels for '{}': {}", code, e);
            Err(AppError::internal("Failed to load channels"))
        }
    }
}

/// Country metadata plus the current local time there
pub async fn get_country_info(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<CountryInfo>> {
    let code = normalize_country_code(&code)?;

    state
        .catalog
        .countries()
        .info(&code, chrono::Utc::now())
        .map(Json)
        .ok_or_else(|| AppError::not_found("Country", code))
}
