//! Shoe catalog
//!
//! The storefront renders whatever catalog it is handed: the embedded demo
//! inventory by default, or a JSON file supplied on the command line.
//! Catalogs are immutable once loaded.

use std::path::Path;

use crate::error::StoreError;
use crate::types::Shoe;

/// Demo inventory bundled into the binary.
const BUILTIN_SHOES: &str = include_str!("../data/shoes.json");

/// An ordered, read-only collection of shoes.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    shoes: Vec<Shoe>,
}

impl Catalog {
    /// Parse the embedded demo inventory.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_json(BUILTIN_SHOES)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        tracing::info!("Loading catalog from {:?}", path);
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from a JSON array of shoes.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let shoes: Vec<Shoe> = serde_json::from_str(raw)?;
        tracing::debug!("Parsed catalog with {} shoes", shoes.len());
        Ok(Self { shoes })
    }

    /// All shoes in catalog order.
    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    /// Look up a shoe by its slug.
    pub fn find(&self, slug: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|s| s.slug == slug)
    }

    /// Look up a shoe by slug, erroring when absent.
    pub fn get(&self, slug: &str) -> Result<&Shoe, StoreError> {
        self.find(slug)
            .ok_or_else(|| StoreError::ShoeNotFound(slug.to_string()))
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        // Every slug is unique; the router depends on it
        let mut slugs: Vec<_> = catalog.shoes().iter().map(|s| s.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.len());
    }

    #[test]
    fn test_find_by_slug() {
        let catalog = Catalog::builtin().unwrap();
        let first = &catalog.shoes()[0];
        assert_eq!(catalog.find(&first.slug), Some(first));
        assert_eq!(catalog.find("no-such-shoe"), None);
    }

    #[test]
    fn test_get_missing_slug_errors() {
        let catalog = Catalog::builtin().unwrap();
        let err = catalog.get("no-such-shoe").unwrap_err();
        assert!(matches!(err, StoreError::ShoeNotFound(_)));
    }

    #[test]
    fn test_from_path_round_trip() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_string(catalog.shoes()).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = Catalog::from_path(file.path()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
