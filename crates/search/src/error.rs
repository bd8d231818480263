//! Error types for the search crate.
//!
//! Searching itself never fails. These errors come from the edges: loading a
//! catalog snapshot from JSON and validating tunables.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur around search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Catalog JSON could not be parsed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Configuration value out of range
    #[error("Invalid search config: {0}")]
    InvalidConfig(String),
}

/// Error code for programmatic handling.
/// Range: 12xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Catalog JSON could not be parsed
    InvalidCatalog = 12001,
    /// Configuration value out of range
    InvalidConfig = 12002,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidCatalog(_) => SearchErrorCode::InvalidCatalog,
            SearchError::InvalidConfig(_) => SearchErrorCode::InvalidConfig,
        }
    }
}
