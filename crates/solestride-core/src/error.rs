//! Error types for Solestride

use thiserror::Error;

/// Main error type for catalog and storefront operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// No shoe with the given slug exists in the catalog
    #[error("Shoe not found: {0}")]
    ShoeNotFound(String),

    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
