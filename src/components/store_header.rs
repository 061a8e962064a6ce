//! Storefront header bar.

use dioxus::prelude::*;

use crate::app::Route;

/// Title bar shown on every page, linking back to the listing.
#[component]
pub fn StoreHeader() -> Element {
    rsx! {
        header { class: "store-header",
            Link { to: Route::Listing {}, class: "store-title", "Solestride" }
            span { class: "store-tagline", "run in something good" }
        }
    }
}
