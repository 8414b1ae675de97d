//! Static country reference data

use serde::{Deserialize, Serialize};

/// One entry of the country metadata file, keyed externally by country code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryMetadata {
    /// Display name
    pub country: String,
    #[serde(default)]
    pub capital: String,
    /// IANA timezone identifier
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub has_channels: bool,
}

/// Country listing entry returned by `/api/countries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    /// Lowercased country code
    pub code: String,
    pub name: String,
    pub capital: String,
    pub time_zone: String,
    pub has_channels: bool,
}

/// Country detail with the current wall-clock time in its timezone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    #[serde(flatten)]
    pub summary: CountrySummary,
    /// `None` when the timezone identifier is unknown
    pub local_time: Option<String>,
    pub time_label: String,
}

impl CountrySummary {
    pub fn from_metadata(code: &str, metadata: &CountryMetadata) -> Self {
        Self {
            code: code.to_lowercase(),
            name: metadata.country.clone(),
            capital: metadata.capital.clone(),
            time_zone: metadata.time_zone.clone(),
            has_channels: metadata.has_channels,
        }
    }
}
