//! Configuration default values
//!
//! Kept in one place so the TOML defaults, the generated config file and the
//! CLI help stay in agreement.

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Catalog defaults
pub const DEFAULT_COUNTRIES_PATH: &str = "./app/countries";
pub const DEFAULT_CATEGORIES_PATH: &str = "./app/categories";
pub const DEFAULT_AGGREGATE_FILE: &str = "all channels.json";
pub const DEFAULT_METADATA_PATH: &str = "./app/countries_metadata.json";
