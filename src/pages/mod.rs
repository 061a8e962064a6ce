//! Page components for the Solestride storefront.

mod listing;
mod shoe_detail;

pub use listing::Listing;
pub use shoe_detail::ShoeDetail;
