//! Error type definitions for the catalog service

use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
///
/// Every handler returns this type; `status_code` is the single table mapping
/// an error kind to the HTTP status the client sees.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required request parameter was absent or blank
    #[error("Missing parameter: {parameter}")]
    ParameterMissing { parameter: String },

    /// Resource not found errors
    #[error("Not found: {resource} with id {id}")]
    NotFound { resource: String, id: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors raised while resolving or reading a catalog file
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Selector contains characters that cannot name a catalog file
    #[error("Invalid {kind} selector: '{value}'")]
    InvalidSelector { kind: &'static str, value: String },

    /// The backing file does not exist
    #[error("Catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading a file or directory failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid channel JSON
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Aggregate file parsed but is not an array of channels
    #[error("Invalid channel data in {}: expected an array", path.display())]
    InvalidShape { path: PathBuf },
}

impl AppError {
    /// Create a missing parameter error
    pub fn parameter_missing<S: Into<String>>(parameter: S) -> Self {
        Self::ParameterMissing {
            parameter: parameter.into(),
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found<R: Into<String>, I: Into<String>>(resource: R, id: I) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ParameterMissing { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Catalog(err) => match err {
                CatalogError::InvalidSelector { .. } => StatusCode::BAD_REQUEST,
                CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
                CatalogError::Io { .. }
                | CatalogError::Parse { .. }
                | CatalogError::InvalidShape { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message safe to show to clients; carries no paths or parser detail
    pub fn public_message(&self) -> String {
        match self {
            Self::ParameterMissing { parameter } => {
                format!("Parameter '{}' is required", parameter)
            }
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::Internal { message } => message.clone(),
            Self::Catalog(err) => match err {
                CatalogError::InvalidSelector { kind, .. } => format!("Invalid {}", kind),
                CatalogError::NotFound { .. } => "Resource not found".to_string(),
                CatalogError::InvalidShape { .. } => {
                    "Internal server error: Invalid channel data".to_string()
                }
                CatalogError::Io { .. } | CatalogError::Parse { .. } => {
                    "Internal server error".to_string()
                }
            },
        }
    }
}

impl CatalogError {
    /// Create an invalid selector error
    pub fn invalid_selector<V: Into<String>>(kind: &'static str, value: V) -> Self {
        Self::InvalidSelector {
            kind,
            value: value.into(),
        }
    }

    /// Classify an I/O failure, turning a missing file into `NotFound`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
