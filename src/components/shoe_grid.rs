//! Responsive grid of shoe cards.

use dioxus::prelude::*;
use solestride_core::Shoe;

use super::ShoeCard;

/// Lays out one [`ShoeCard`] per shoe, in catalog order.
#[component]
pub fn ShoeGrid(
    /// Shoes to display
    shoes: Vec<Shoe>,
) -> Element {
    rsx! {
        div { class: "shoe-grid",
            for shoe in shoes.iter() {
                ShoeCard { key: "{shoe.slug}", shoe: shoe.clone() }
            }
        }
    }
}
