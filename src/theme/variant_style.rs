//! Per-variant card styling table.
//!
//! All variant-dependent presentation lives in one exhaustive lookup so a
//! new variant cannot ship with half its styling missing. Business copy
//! (the sticker label) stays with [`Variant`] in the core crate; only
//! visual treatment is decided here.

use solestride_core::Variant;

use super::colors;

/// Visual treatment of a card for one display variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Sticker background, `None` when no sticker is shown
    pub sticker_bg: Option<&'static str>,
    /// Color of the base price
    pub price_color: &'static str,
    /// Text decoration of the base price
    pub price_decoration: &'static str,
}

/// Look up the styling for a variant.
pub fn variant_style(variant: Variant) -> VariantStyle {
    match variant {
        Variant::OnSale => VariantStyle {
            sticker_bg: Some(colors::PRIMARY),
            // Struck through and muted so the sale price reads as current
            price_color: colors::GRAY_700,
            price_decoration: "line-through",
        },
        Variant::NewRelease => VariantStyle {
            sticker_bg: Some(colors::SECONDARY),
            price_color: "inherit",
            price_decoration: "none",
        },
        Variant::Default => VariantStyle {
            sticker_bg: None,
            price_color: "inherit",
            price_decoration: "none",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_shown_iff_not_default() {
        assert!(variant_style(Variant::OnSale).sticker_bg.is_some());
        assert!(variant_style(Variant::NewRelease).sticker_bg.is_some());
        assert!(variant_style(Variant::Default).sticker_bg.is_none());
    }

    #[test]
    fn test_only_sale_strikes_the_price() {
        assert_eq!(variant_style(Variant::OnSale).price_decoration, "line-through");
        assert_eq!(variant_style(Variant::NewRelease).price_decoration, "none");
        assert_eq!(variant_style(Variant::Default).price_decoration, "none");
    }

    #[test]
    fn test_sticker_accents_differ_per_variant() {
        let sale = variant_style(Variant::OnSale).sticker_bg;
        let new = variant_style(Variant::NewRelease).sticker_bg;
        assert_ne!(sale, new);
    }

    #[test]
    fn test_sale_price_is_muted() {
        assert_eq!(variant_style(Variant::OnSale).price_color, colors::GRAY_700);
    }
}
