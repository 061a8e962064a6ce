//! Display formatting helpers
//!
//! Fixed USD presentation and naive pluralization, shared by every card.
//! Locale-aware formatting is out of scope for the storefront.

/// Format a price as a USD string, e.g. `1250.5` → `"$1,250.50"`.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    // Group the integer part with thousands separators
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Prefix a noun with its count, appending `s` unless the count is 1.
///
/// `pluralize("Color", 3)` → `"3 Colors"`, `pluralize("Color", 1)` → `"1 Color"`.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_basic() {
        assert_eq!(format_price(150.0), "$150.00");
        assert_eq!(format_price(110.0), "$110.00");
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        assert_eq!(format_price(89.995), "$90.00");
        assert_eq!(format_price(0.004), "$0.00");
    }

    #[test]
    fn test_format_price_thousands() {
        assert_eq!(format_price(1250.5), "$1,250.50");
        assert_eq!(format_price(1234567.0), "$1,234,567.00");
    }

    #[test]
    fn test_format_price_zero() {
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-12.5), "-$12.50");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Color", 3), "3 Colors");
        assert_eq!(pluralize("Color", 1), "1 Color");
        assert_eq!(pluralize("Color", 0), "0 Colors");
    }
}
