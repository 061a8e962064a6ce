//! Shoe Card Component
//!
//! One tile in the storefront grid: image with an optional sale/new
//! sticker, then name, price, and colorway count.

use dioxus::prelude::*;
use solestride_core::{format_price, pluralize, Shoe, Variant};

use super::Spacer;
use crate::app::Route;
use crate::theme::variant_style;

/// A product card linking to the shoe's detail page.
///
/// Classifies the shoe into its display variant on every render and
/// branches the sticker, price treatment, and sale-price line on the
/// result. Pure presentation: identical props render an identical tree.
#[component]
pub fn ShoeCard(
    /// Shoe data to display
    shoe: Shoe,
) -> Element {
    let variant = Variant::classify(shoe.sale_price, shoe.release_date);
    let style = variant_style(variant);
    // Sticker shown for every variant except Default
    let sticker = variant.badge_label().zip(style.sticker_bg);

    rsx! {
        Link {
            to: Route::ShoeDetail { slug: shoe.slug.clone() },
            class: "shoe-card-link",

            article {
                div { class: "shoe-card__image-wrapper",
                    if let Some((label, bg)) = sticker {
                        div {
                            class: "shoe-card__sticker",
                            style: "background-color: {bg};",
                            "{label}"
                        }
                    }
                    img {
                        class: "shoe-card__image",
                        src: "{shoe.image_src}",
                        alt: "",
                    }
                }

                Spacer { size: 12 }

                div { class: "shoe-card__row",
                    h3 { class: "shoe-card__name", "{shoe.name}" }
                    span {
                        class: "shoe-card__price",
                        style: "color: {style.price_color}; text-decoration: {style.price_decoration};",
                        "{format_price(shoe.price)}"
                    }
                }

                div { class: "shoe-card__row",
                    p { class: "shoe-card__colors",
                        {pluralize("Color", shoe.num_of_colors)}
                    }
                    if variant == Variant::OnSale {
                        if let Some(sale_price) = shoe.sale_price {
                            span { class: "shoe-card__sale-price",
                                "{format_price(sale_price)}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use solestride_core::Variant;

    use crate::theme::variant_style;

    // Rendering the component needs a Dioxus runtime; what the card
    // branches on is covered here through the pieces it composes.

    #[test]
    fn sale_card_shows_sticker_and_struck_price() {
        let variant = Variant::classify(Some(110.0), Utc::now() - Duration::days(365 * 5));
        assert_eq!(variant, Variant::OnSale);
        assert_eq!(variant.badge_label(), Some("Sale"));
        assert_eq!(variant_style(variant).price_decoration, "line-through");
    }

    #[test]
    fn new_release_card_shows_just_released_sticker() {
        let variant = Variant::classify(None, Utc::now() - Duration::days(2));
        assert_eq!(variant, Variant::NewRelease);
        assert_eq!(variant.badge_label(), Some("Just Released!"));
        assert_eq!(variant_style(variant).price_decoration, "none");
    }

    #[test]
    fn default_card_has_no_sticker() {
        let variant = Variant::classify(None, Utc::now() - Duration::days(365 * 5));
        assert_eq!(variant, Variant::Default);
        assert_eq!(variant.badge_label(), None);
        assert!(variant_style(variant).sticker_bg.is_none());
    }
}
