//! Fixed-size spacing primitive.

use dioxus::prelude::*;

/// Square spacer used between layout blocks.
///
/// Renders an empty block of `size` pixels in both dimensions.
#[component]
pub fn Spacer(
    /// Edge length in pixels
    size: u32,
) -> Element {
    rsx! {
        span {
            style: "display: block; width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;",
        }
    }
}
