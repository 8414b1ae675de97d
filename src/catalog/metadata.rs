//! Country reference data
//!
//! Loaded once at startup from a JSON object keyed by country code and never
//! mutated afterwards.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::errors::{CatalogError, CatalogResult};
use crate::models::{CountryInfo, CountryMetadata, CountrySummary};
use crate::utils::time::{format_local_time, time_label};

#[derive(Debug, Clone, Default)]
pub struct CountryDirectory {
    entries: BTreeMap<String, CountryMetadata>,
}

impl CountryDirectory {
    /// Build from entries keyed by country code in any case
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, CountryMetadata)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, metadata)| (code.to_lowercase(), metadata))
                .collect(),
        }
    }

    pub async fn load(path: &Path) -> CatalogResult<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CatalogError::from_io(path, e))?;

        let entries: BTreeMap<String, CountryMetadata> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            "Loaded metadata for {} countries from {}",
            entries.len(),
            path.display()
        );
        Ok(Self::from_entries(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&CountryMetadata> {
        self.entries.get(&code.to_lowercase())
    }

    /// All countries sorted by display name
    pub fn summaries(&self) -> Vec<CountrySummary> {
        let mut summaries: Vec<CountrySummary> = self
            .entries
            .iter()
            .map(|(code, metadata)| CountrySummary::from_metadata(code, metadata))
            .collect();

        summaries.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.code.cmp(&b.code))
        });
        summaries
    }

    /// Metadata for `code` with the wall-clock time there at `now`
    pub fn info(&self, code: &str, now: DateTime<Utc>) -> Option<CountryInfo> {
        let code = code.to_lowercase();
        let metadata = self.entries.get(&code)?;
        let local_time = format_local_time(now, &metadata.time_zone);
        let time_label = time_label(Some(&code), local_time.is_some());

        Some(CountryInfo {
            summary: CountrySummary::from_metadata(&code, metadata),
            local_time,
            time_label,
        })
    }
}
