//! Catalog context provider for the storefront.
//!
//! The catalog is loaded once at startup (see `App`) and handed to every
//! page and card through Dioxus context.

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use solestride_core::Catalog;

/// Shared catalog type for context.
///
/// `None` until the startup load finishes; immutable afterwards, so an
/// `Arc` is enough and components clone it freely.
pub type SharedCatalog = Option<Arc<Catalog>>;

/// Get the catalog file override from the command line, if any.
pub fn get_catalog_path() -> Option<PathBuf> {
    crate::get_catalog_path()
}

/// Hook to access the shared catalog from context.
///
/// Returns a Signal that flips from `None` to `Some` once loading is done.
pub fn use_catalog() -> Signal<SharedCatalog> {
    use_context::<Signal<SharedCatalog>>()
}
