use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use livetv_catalog::{
    catalog::CatalogStore,
    config::{CatalogConfig, Config},
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "livetv-catalog")]
#[command(version)]
#[command(about = "A live TV directory service serving channel catalogs by country, category and search")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Data directory containing countries/, categories/ and
    /// countries_metadata.json (overrides config file)
    #[arg(short = 'd', long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("livetv_catalog={},tower_http=trace", cli.log_level)
    } else {
        format!("livetv_catalog={},tower_http=info", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Live TV Catalog v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.catalog = CatalogConfig::rooted_at(&data_dir);
    }

    info!(
        "Serving countries from {}, categories from {}",
        config.catalog.countries_path.display(),
        config.catalog.categories_path.display()
    );

    let catalog = CatalogStore::open(&config.catalog).await;
    info!(
        "Catalog initialized with metadata for {} countries",
        catalog.countries().len()
    );

    let web_server = WebServer::new(config, catalog)?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
