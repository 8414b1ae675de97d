//! Pure channel filtering
//!
//! Nothing in here touches the filesystem: the loaders hand over channel
//! lists and these functions pick the subset a request asked for.

pub mod category;
pub mod search;

pub use category::{filter_by_category, Category, CategoryDescriptor};
pub use search::{search_channels, SearchQuery};
