//! Solestride Core Library
//!
//! Domain logic for the Solestride shoe storefront: the shoe catalog,
//! display-variant classification, and the small formatting helpers the
//! UI renders with.
//!
//! ## Overview
//!
//! A [`Shoe`] is plain display data supplied by the catalog. Each card in
//! the storefront classifies its shoe into one of three [`Variant`]s
//! (on sale, just released, or neither) and branches its rendering on the
//! result. Nothing here is stateful: classification runs fresh on every
//! render and the catalog is loaded once at startup.
//!
//! ## Quick Start
//!
//! ```
//! use solestride_core::{Catalog, Variant};
//!
//! let catalog = Catalog::builtin()?;
//! for shoe in catalog.shoes() {
//!     let variant = Variant::classify(shoe.sale_price, shoe.release_date);
//!     println!("{}: {:?}", shoe.name, variant);
//! }
//! # Ok::<(), solestride_core::StoreError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod types;
pub mod variant;

// Re-exports
pub use catalog::Catalog;
pub use error::StoreError;
pub use format::{format_price, pluralize};
pub use types::Shoe;
pub use variant::{is_new_shoe, is_new_shoe_at, Variant};
