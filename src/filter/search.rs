//! Free-text channel name search

use crate::models::Channel;

/// A non-blank, lowercased search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// `None` for a missing or blank term
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, channel: &Channel) -> bool {
        channel.name_lowercase().contains(&self.0)
    }
}

/// Channels whose name contains the query, in catalog order
pub fn search_channels(channels: &[Channel], query: &SearchQuery) -> Vec<Channel> {
    channels
        .iter()
        .filter(|channel| query.matches(channel))
        .cloned()
        .collect()
}
