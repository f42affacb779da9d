/// Error types for the case feed pipeline
use thiserror::Error;

/// Main error type for feed decoding, transformation and dataset derivation.
///
/// Every variant degrades to "no data available" at the map; none is fatal.
#[derive(Error, Debug)]
pub enum DataError {
    /// A record lacks a required field or carries an unusable value
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// No records to derive a scale from
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Feed body is not a JSON array
    #[error("Invalid feed body: {0}")]
    InvalidFeed(#[from] serde_json::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint answered with a non-success status
    #[cfg(feature = "api")]
    #[error("Feed responded with status {0}")]
    HttpStatus(u16),
}

impl DataError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        DataError::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }
}

/// Type alias for Results using DataError
pub type Result<T> = std::result::Result<T, DataError>;
