//! Error types for catalog and configuration parsing.
//!
//! Widget operations themselves never fail; these errors only arise when
//! loading the embedded slide catalog or validating the page configuration.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`crate::slide::Catalog::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not a JSON array of slide records.
    #[error("failed to parse slide catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error returned by [`crate::config::PageConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Drag bounds are inverted.
    #[error("invalid drag bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: f64, max: f64 },
    /// A required element id or selector is empty.
    #[error("empty selector for {0}")]
    EmptySelector(&'static str),
}
