//! Channel catalog access
//!
//! [`CatalogStore`] resolves a [`Selector`] to the channel records backing it:
//!
//! - **Country**: one `<code>.json` file from the countries directory
//! - **Legacy category**: one `<key>.json` file from the categories directory
//! - **Derived category**: every country file, concatenated and keyword-filtered
//! - **All**: the aggregate file, read once and cached for the process lifetime

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

pub mod cache;
pub mod loader;
pub mod metadata;

pub use cache::AggregateCatalog;
pub use metadata::CountryDirectory;

use crate::config::CatalogConfig;
use crate::errors::CatalogResult;
use crate::filter::{filter_by_category, search_channels, Category, SearchQuery};
use crate::models::Channel;

/// What a caller wants channels for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Country(&'a str),
    LegacyCategory(&'a str),
    Category(Category),
    All,
}

#[derive(Clone)]
pub struct CatalogStore {
    countries_path: PathBuf,
    categories_path: PathBuf,
    aggregate: Arc<AggregateCatalog>,
    countries: Arc<CountryDirectory>,
}

impl CatalogStore {
    pub fn new(config: &CatalogConfig, countries: CountryDirectory) -> Self {
        Self {
            countries_path: config.countries_path.clone(),
            categories_path: config.categories_path.clone(),
            aggregate: Arc::new(AggregateCatalog::new(config.aggregate_path())),
            countries: Arc::new(countries),
        }
    }

    /// Build a store, loading country metadata from disk
    ///
    /// Missing or unreadable metadata leaves the country directory empty; the
    /// channel endpoints do not depend on it.
    pub async fn open(config: &CatalogConfig) -> Self {
        let countries = match CountryDirectory::load(&config.metadata_path).await {
            Ok(countries) => countries,
            Err(e) => {
                warn!("Country metadata unavailable, continuing without it: {}", e);
                CountryDirectory::default()
            }
        };
        Self::new(config, countries)
    }

    pub fn aggregate(&self) -> &AggregateCatalog {
        &self.aggregate
    }

    pub fn countries(&self) -> &CountryDirectory {
        &self.countries
    }

    /// Channels backing `selector`
    ///
    /// Country and category selectors read from disk on every call;
    /// [`Selector::All`] shares the cached aggregate catalog.
    pub async fn load(&self, selector: Selector<'_>) -> CatalogResult<Arc<Vec<Channel>>> {
        match selector {
            Selector::Country(code) => self.country_channels(code).await.map(Arc::new),
            Selector::LegacyCategory(key) => {
                self.legacy_category_channels(key).await.map(Arc::new)
            }
            Selector::Category(category) => {
                self.category_channels(category).await.map(Arc::new)
            }
            Selector::All => self.aggregate.channels().await,
        }
    }

    /// Name search over the cached aggregate catalog
    pub async fn search(&self, query: &SearchQuery) -> CatalogResult<Vec<Channel>> {
        let channels = self.load(Selector::All).await?;
        Ok(search_channels(&channels, query))
    }

    async fn country_channels(&self, code: &str) -> CatalogResult<Vec<Channel>> {
        let code = loader::normalize_country_code(code)?;
        let path = self.countries_path.join(format!("{}.json", code));
        loader::read_channels(&path).await
    }

    async fn legacy_category_channels(&self, key: &str) -> CatalogResult<Vec<Channel>> {
        let key = loader::validate_category_key(key)?;
        let path = self.categories_path.join(format!("{}.json", key));
        loader::read_channels(&path).await
    }

    /// Every country file concatenated in file-name order, then keyword-filtered
    async fn category_channels(&self, category: Category) -> CatalogResult<Vec<Channel>> {
        let files = loader::list_json_files(&self.countries_path).await?;
        let channels = loader::read_channel_files(&files).await?;
        let total = channels.len();
        let matched = filter_by_category(channels, category);
        debug!(
            "Category '{}' matched {} of {} channels",
            category,
            matched.len(),
            total
        );
        Ok(matched)
    }
}
