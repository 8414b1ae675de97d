use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Locations of the flat-file channel catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding one `<code>.json` file per country
    #[serde(default = "default_countries_path")]
    pub countries_path: PathBuf,
    /// Directory holding the legacy per-category files
    #[serde(default = "default_categories_path")]
    pub categories_path: PathBuf,
    /// Aggregate file used for search, relative to `categories_path`
    #[serde(default = "default_aggregate_file")]
    pub aggregate_file: String,
    /// Country reference data keyed by country code
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_countries_path() -> PathBuf {
    PathBuf::from(DEFAULT_COUNTRIES_PATH)
}

fn default_categories_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATEGORIES_PATH)
}

fn default_aggregate_file() -> String {
    DEFAULT_AGGREGATE_FILE.to_string()
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from(DEFAULT_METADATA_PATH)
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            countries_path: default_countries_path(),
            categories_path: default_categories_path(),
            aggregate_file: default_aggregate_file(),
            metadata_path: default_metadata_path(),
        }
    }
}

impl CatalogConfig {
    /// Point every catalog location at a single data directory laid out as
    /// `countries/`, `categories/` and `countries_metadata.json`
    pub fn rooted_at(data_dir: &Path) -> Self {
        Self {
            countries_path: data_dir.join("countries"),
            categories_path: data_dir.join("categories"),
            aggregate_file: default_aggregate_file(),
            metadata_path: data_dir.join("countries_metadata.json"),
        }
    }

    pub fn aggregate_path(&self) -> PathBuf {
        self.categories_path.join(&self.aggregate_file)
    }
}

impl Config {
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if Path::new(config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }
}
