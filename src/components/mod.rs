//! UI components for the Solestride storefront.

mod shoe_card;
mod shoe_grid;
mod spacer;
mod store_header;

pub use shoe_card::ShoeCard;
pub use shoe_grid::ShoeGrid;
pub use spacer::Spacer;
pub use store_header::StoreHeader;
