//! Display-variant classification for shoe cards
//!
//! Every card is shown in exactly one of three variants. A shoe can
//! satisfy both the sale and the new-release condition at once; the sale
//! signal always wins. That precedence is a product decision and must not
//! be reordered.

use chrono::{DateTime, Months, Utc};

/// How a shoe card presents itself on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// An active discount exists; shows the "Sale" sticker and sale price
    OnSale,
    /// Released within the last month; shows the "Just Released!" sticker
    NewRelease,
    /// Neither condition holds; no sticker, plain pricing
    Default,
}

impl Variant {
    /// Classify a shoe from its sale price and release date.
    ///
    /// Precedence, first match wins:
    /// 1. Any numeric `sale_price` (zero included) → [`Variant::OnSale`]
    /// 2. Release date within the last month → [`Variant::NewRelease`]
    /// 3. Otherwise → [`Variant::Default`]
    pub fn classify(sale_price: Option<f64>, release_date: DateTime<Utc>) -> Self {
        Self::classify_at(sale_price, release_date, Utc::now())
    }

    /// Same policy with an explicit clock.
    pub fn classify_at(
        sale_price: Option<f64>,
        release_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        if sale_price.is_some() {
            Variant::OnSale
        } else if is_new_shoe_at(release_date, now) {
            Variant::NewRelease
        } else {
            Variant::Default
        }
    }

    /// Sticker copy for this variant, `None` when no sticker is shown.
    pub fn badge_label(&self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just Released!"),
            Variant::Default => None,
        }
    }
}

/// Whether a shoe counts as newly released right now.
pub fn is_new_shoe(release_date: DateTime<Utc>) -> bool {
    is_new_shoe_at(release_date, Utc::now())
}

/// Whether `release_date` falls after `now` minus one calendar month.
///
/// Strictly after: a shoe released exactly one month ago is no longer new.
pub fn is_new_shoe_at(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.checked_sub_months(Months::new(1))
        .map(|cutoff| release_date > cutoff)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sale_price_wins_over_recent_release() {
        // Released 2 days ago AND discounted: sale takes precedence
        let released = now() - Duration::days(2);
        let variant = Variant::classify_at(Some(110.0), released, now());
        assert_eq!(variant, Variant::OnSale);
    }

    #[test]
    fn test_sale_price_wins_over_old_release() {
        let released = now() - Duration::days(365 * 5);
        let variant = Variant::classify_at(Some(110.0), released, now());
        assert_eq!(variant, Variant::OnSale);
    }

    #[test]
    fn test_zero_sale_price_is_still_a_sale() {
        // Zero is a numeric sale price, not "absent"
        let released = now() - Duration::days(365);
        let variant = Variant::classify_at(Some(0.0), released, now());
        assert_eq!(variant, Variant::OnSale);
    }

    #[test]
    fn test_recent_release_without_sale() {
        let released = now() - Duration::days(2);
        let variant = Variant::classify_at(None, released, now());
        assert_eq!(variant, Variant::NewRelease);
    }

    #[test]
    fn test_old_release_without_sale() {
        let released = now() - Duration::days(365 * 5);
        let variant = Variant::classify_at(None, released, now());
        assert_eq!(variant, Variant::Default);
    }

    #[test]
    fn test_one_month_boundary() {
        // Exactly one month ago: no longer new (strict comparison)
        let cutoff = now().checked_sub_months(Months::new(1)).unwrap();
        assert!(!is_new_shoe_at(cutoff, now()));
        // One second inside the window: still new
        assert!(is_new_shoe_at(cutoff + Duration::seconds(1), now()));
    }

    #[test]
    fn test_future_release_counts_as_new() {
        // Preorders sit inside the window
        assert!(is_new_shoe_at(now() + Duration::days(7), now()));
    }

    #[test]
    fn test_classification_is_pure() {
        let released = now() - Duration::days(10);
        let a = Variant::classify_at(None, released, now());
        let b = Variant::classify_at(None, released, now());
        assert_eq!(a, b);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(Variant::OnSale.badge_label(), Some("Sale"));
        assert_eq!(Variant::NewRelease.badge_label(), Some("Just Released!"));
        assert_eq!(Variant::Default.badge_label(), None);
    }
}
