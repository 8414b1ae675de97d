use axum::{extract::State, Json};

use crate::web::{responses::HealthResponse, AppState};

/// Liveness check with catalog cache status
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = chrono::Utc::now();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now,
        uptime_seconds: (now - state.start_time).num_seconds(),
        catalog_cached: state.catalog.aggregate().is_loaded(),
        countries: state.catalog.countries().len(),
    })
}
