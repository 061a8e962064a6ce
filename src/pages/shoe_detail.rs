//! Shoe detail page - navigation target of every card.

use dioxus::prelude::*;
use solestride_core::{format_price, pluralize, Shoe, Variant};

use crate::app::Route;
use crate::components::StoreHeader;
use crate::context::use_catalog;

/// Detail view for a single shoe, looked up by slug.
#[component]
pub fn ShoeDetail(slug: String) -> Element {
    let catalog = use_catalog();

    let body = match catalog() {
        Some(cat) => match cat.find(&slug) {
            Some(shoe) => render_shoe(shoe),
            None => {
                tracing::warn!("Unknown shoe slug: {}", slug);
                rsx! {
                    div { class: "empty-state", "We don't carry that shoe." }
                }
            }
        },
        None => rsx! {
            div { class: "loading-state", "Loading the shop\u{2026}" }
        },
    };

    rsx! {
        StoreHeader {}

        main { class: "shoe-detail",
            Link { to: Route::Listing {}, class: "back-link", "\u{2190} Back to the shop" }
            {body}
        }
    }
}

fn render_shoe(shoe: &Shoe) -> Element {
    let variant = Variant::classify(shoe.sale_price, shoe.release_date);

    rsx! {
        img {
            class: "shoe-detail__image",
            src: "{shoe.image_src}",
            alt: "{shoe.name}",
        }
        h2 { class: "shoe-detail__name", "{shoe.name}" }
        if let Some(label) = variant.badge_label() {
            p { class: "shoe-detail__meta", "{label}" }
        }
        p { class: "shoe-detail__meta",
            {pluralize("Color", shoe.num_of_colors)}
        }
        if let Some(sale_price) = shoe.sale_price {
            p {
                span {
                    style: "text-decoration: line-through; color: var(--gray-700);",
                    "{format_price(shoe.price)}"
                }
                " "
                span { class: "shoe-card__sale-price",
                    "{format_price(sale_price)}"
                }
            }
        } else {
            p { "{format_price(shoe.price)}" }
        }
    }
}
