//! Web layer module
//!
//! HTTP interface for the channel catalog. Handlers are thin: they validate
//! parameters, call into [`CatalogStore`] and the pure filters, and report
//! failures through [`AppError`](crate::errors::AppError), whose status
//! mapping is shared by every route.
//!
//! # Routes
//!
//! - `GET /api/countries` country reference list
//! - `GET /api/countries/{code}` channels of one country
//! - `GET /api/countries/{code}/info` country detail with local time
//! - `GET /api/categories` keyword categories
//! - `GET /api/categories/{category}` keyword-filtered channels of all countries
//! - `GET /api/channels?category=` legacy per-category file
//! - `GET /api/search?q=` name search over the aggregate catalog

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{catalog::CatalogStore, config::Config};

pub mod extractors;
pub mod handlers;
pub mod responses;

// Re-export commonly used types
pub use extractors::{ChannelsParams, SearchParams};
pub use responses::{handle_error, ErrorResponse, HealthResponse};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, catalog: CatalogStore) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = create_router(AppState::new(catalog));

        Ok(Self { app, addr })
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Create the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api_routes())
        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Countries
        .route("/countries", get(handlers::countries::list_countries))
        .route(
            "/countries/{code}",
            get(handlers::countries::get_country_channels),
        )
        .route(
            "/countries/{code}/info",
            get(handlers::countries::get_country_info),
        )
        // Derived categories
        .route("/categories", get(handlers::categories::list_categories))
        .route(
            "/categories/{category}",
            get(handlers::categories::get_category_channels),
        )
        // Legacy per-category files
        .route(
            "/channels",
            get(handlers::channels::get_legacy_category_channels),
        )
        // Search
        .route("/search", get(handlers::search::search_channels))
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            start_time: chrono::Utc::now(),
        }
    }
}
