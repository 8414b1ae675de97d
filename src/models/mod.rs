use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub mod country;

pub use country::{CountryInfo, CountryMetadata, CountrySummary};

/// One streamable TV source as stored in the catalog files
///
/// The record is kept exactly as read so responses re-emit it unchanged.
/// Known keys are `nanoid`, `name`, `iptv_urls`, `youtube_urls` (fallback
/// video-platform URLs), `language`, `country` and `isGeoBlocked`; none of
/// them is required, and filtering only looks at `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Channel(Value);

impl Channel {
    /// Build a record holding only an id and a name
    pub fn new<I: Into<String>, N: Into<String>>(nanoid: I, name: N) -> Self {
        Self(json!({ "nanoid": nanoid.into(), "name": name.into() }))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn nanoid(&self) -> Option<&str> {
        self.str_field("nanoid")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Lowercased display name used by every name-based predicate
    ///
    /// A record without a string `name` yields an empty string and so matches
    /// no keyword or search term.
    pub fn name_lowercase(&self) -> String {
        self.name().map(str::to_lowercase).unwrap_or_default()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
