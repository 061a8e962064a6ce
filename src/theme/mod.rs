//! Storefront theme: color palette, global CSS, and the per-variant
//! styling table.

pub mod colors;
mod styles;
mod variant_style;

pub use styles::GLOBAL_STYLES;
pub use variant_style::{variant_style, VariantStyle};
