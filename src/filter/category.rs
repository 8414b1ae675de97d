//! Keyword-based channel categories
//!
//! Categories are not stored on channels. A channel belongs to a category when
//! its name contains one of that category's keywords, so a channel can fall
//! into several categories or none.

use serde::Serialize;
use std::fmt;

use crate::models::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Sports,
    Music,
    Kids,
    Movies,
    Entertainment,
    /// No predicate: every channel matches
    All,
}

/// Category as listed by `/api/categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub name: Category,
    pub keywords: &'static [&'static str],
}

impl Category {
    /// Categories that carry a keyword predicate
    pub const KEYWORDED: [Category; 6] = [
        Category::News,
        Category::Sports,
        Category::Music,
        Category::Kids,
        Category::Movies,
        Category::Entertainment,
    ];

    /// Resolve a category name case-insensitively
    ///
    /// Names without a keyword set, including "all channels", resolve to
    /// [`Category::All`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "news" => Self::News,
            "sports" => Self::Sports,
            "music" => Self::Music,
            "kids" => Self::Kids,
            "movies" => Self::Movies,
            "entertainment" => Self::Entertainment,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Sports => "sports",
            Self::Music => "music",
            Self::Kids => "kids",
            Self::Movies => "movies",
            Self::Entertainment => "entertainment",
            Self::All => "all",
        }
    }

    /// Lowercase substrings that place a channel name in this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::News => &["news", "info", "24"],
            Self::Sports => &["sport", "racing", "fight"],
            Self::Music => &["music", "mtv", "hits"],
            Self::Kids => &["kids", "junior", "cartoon"],
            Self::Movies => &["movie", "film", "cinema"],
            Self::Entertainment => &["entertainment", "tv", "show"],
            Self::All => &[],
        }
    }

    /// `lowercase_name` must already be lowercased
    pub fn matches_name(&self, lowercase_name: &str) -> bool {
        match self {
            Self::All => true,
            _ => self
                .keywords()
                .iter()
                .any(|keyword| lowercase_name.contains(keyword)),
        }
    }

    pub fn matches(&self, channel: &Channel) -> bool {
        self.matches_name(&channel.name_lowercase())
    }

    pub fn descriptor(&self) -> CategoryDescriptor {
        CategoryDescriptor {
            name: *self,
            keywords: self.keywords(),
        }
    }

    /// Every category, keyworded ones first
    pub fn descriptors() -> Vec<CategoryDescriptor> {
        Self::KEYWORDED
            .iter()
            .chain(std::iter::once(&Self::All))
            .map(Category::descriptor)
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep the channels matching `category`, preserving order
pub fn filter_by_category(channels: Vec<Channel>, category: Category) -> Vec<Channel> {
    if category == Category::All {
        return channels;
    }

    channels
        .into_iter()
        .filter(|channel| category.matches(channel))
        .collect()
}
