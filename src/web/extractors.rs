//! Query string parameters

use serde::Deserialize;

/// `/api/search` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `/api/channels` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelsParams {
    pub category: Option<String>,
}

impl ChannelsParams {
    /// The category key, or `None` when missing or blank
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.trim().is_empty())
    }
}
