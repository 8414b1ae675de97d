//! Process-lifetime cache of the aggregate "all channels" file
//!
//! The cache has two states, unloaded and loaded, and moves between them once.
//! Callers that arrive while the first load is running wait on that same load
//! instead of starting their own. A failed load leaves the cache unloaded so
//! the next caller tries again.

use serde_json::Value;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::errors::{CatalogError, CatalogResult};
use crate::models::Channel;

pub struct AggregateCatalog {
    path: PathBuf,
    channels: OnceCell<Arc<Vec<Channel>>>,
    disk_loads: AtomicUsize,
}

impl AggregateCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            channels: OnceCell::new(),
            disk_loads: AtomicUsize::new(0),
        }
    }

    /// The cached catalog, loading it on first use
    pub async fn channels(&self) -> CatalogResult<Arc<Vec<Channel>>> {
        self.channels
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.channels.initialized()
    }

    /// Number of times the file has been read from disk
    pub fn disk_loads(&self) -> usize {
        self.disk_loads.load(Ordering::SeqCst)
    }

    async fn load(&self) -> CatalogResult<Arc<Vec<Channel>>> {
        self.disk_loads.fetch_add(1, Ordering::SeqCst);
        info!("Loading aggregate catalog from {}", self.path.display());

        let result = self.read().await;
        match &result {
            Ok(channels) => info!("Loaded and cached {} channels", channels.len()),
            Err(e) => error!("Failed to load aggregate catalog: {}", e),
        }
        result.map(Arc::new)
    }

    async fn read(&self) -> CatalogResult<Vec<Channel>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::from_io(&self.path, e))?;

        let document = serde_json::from_str::<Value>(&contents).map_err(|source| {
            CatalogError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        match document {
            Value::Array(records) => Ok(records.into_iter().map(Channel::from_value).collect()),
            _ => Err(CatalogError::InvalidShape {
                path: self.path.clone(),
            }),
        }
    }
}
