//! Listing page - the storefront grid.

use dioxus::prelude::*;

use crate::components::{ShoeGrid, StoreHeader};
use crate::context::use_catalog;

/// Main storefront view: header plus a card for every shoe in the
/// catalog. Shows a loading state until the catalog arrives.
#[component]
pub fn Listing() -> Element {
    let catalog = use_catalog();

    let body = match catalog() {
        Some(cat) if cat.is_empty() => rsx! {
            div { class: "empty-state", "Nothing in stock right now." }
        },
        Some(cat) => rsx! {
            h2 { class: "listing-heading", "Running" }
            ShoeGrid { shoes: cat.shoes().to_vec() }
        },
        None => rsx! {
            div { class: "loading-state", "Loading the shop\u{2026}" }
        },
    };

    rsx! {
        StoreHeader {}

        main { class: "listing",
            {body}
        }
    }
}
