//! Flat-file channel loading
//!
//! Every catalog file is a JSON array of [`Channel`] records, kept as read.
//! Files are read fresh on every call; only the aggregate catalog is cached
//! (see [`super::cache`]).

use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{CatalogError, CatalogResult};
use crate::models::Channel;

/// Upper bound on catalog files open at once during a multi-file read
pub const MAX_CONCURRENT_READS: usize = 16;

/// Lowercase a country code and make sure it can only name a file inside the
/// countries directory
pub fn normalize_country_code(code: &str) -> CatalogResult<String> {
    let code = code.trim().to_lowercase();
    let valid = !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(code)
    } else {
        Err(CatalogError::invalid_selector("country code", code))
    }
}

/// Legacy category keys are used verbatim as file stems ("all channels" is a
/// valid key), so only path-escaping input is refused
pub fn validate_category_key(key: &str) -> CatalogResult<&str> {
    let invalid = key.trim().is_empty()
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0')
        || key.contains("..");

    if invalid {
        Err(CatalogError::invalid_selector("category", key))
    } else {
        Ok(key)
    }
}

/// Read and parse one catalog file
pub async fn read_channels(path: &Path) -> CatalogResult<Vec<Channel>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::from_io(path, e))?;

    let channels: Vec<Channel> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Read {} channels from {}", channels.len(), path.display());
    Ok(channels)
}

/// `*.json` files directly inside `dir`, sorted by file name
pub async fn list_json_files(dir: &Path) -> CatalogResult<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Read every file and concatenate the results in the given file order
///
/// At most [`MAX_CONCURRENT_READS`] files are open at a time. Any unreadable
/// or unparseable file aborts the whole read.
pub async fn read_channel_files(paths: &[PathBuf]) -> CatalogResult<Vec<Channel>> {
    let per_file: Vec<Vec<Channel>> = stream::iter(paths.iter().cloned())
        .map(|path| async move { read_channels(&path).await })
        .buffered(MAX_CONCURRENT_READS)
        .try_collect()
        .await?;
    Ok(per_file.into_iter().flatten().collect())
}
