//! Centralized error handling for the catalog service
//!
//! Errors are split by layer:
//!
//! - **Catalog Errors**: selector validation and flat-file loading failures
//! - **Application Errors**: what the web layer reports, each kind mapped to
//!   exactly one HTTP status
//!
//! # Usage
//!
//! ```rust
//! use livetv_catalog::errors::{AppError, AppResult};
//!
//! fn require_query(q: Option<&str>) -> AppResult<&str> {
//!     q.ok_or_else(|| AppError::parameter_missing("q"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for catalog loader Results
pub type CatalogResult<T> = Result<T, CatalogError>;
