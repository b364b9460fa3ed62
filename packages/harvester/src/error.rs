//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Invalid docket id.
    #[error("Invalid docket id: '{0}'. Expected letters, digits, '-' or '.' (e.g., 21A612)")]
    InvalidDocketId(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to fetch a docket detail page.
    #[error("Failed to fetch docket {docket}: {source}")]
    Fetch {
        docket: String,
        #[source]
        source: reqwest::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A worker group failed.
    #[error("Group {group} failed: {message}")]
    Group { group: usize, message: String },
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
