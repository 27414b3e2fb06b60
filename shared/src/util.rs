//! Display helpers for the product table

/// Maximum number of characters of the description shown in the table
pub const DESCRIPTION_PREVIEW_LEN: usize = 50;

/// Keep the first `max_chars` characters (Unicode scalar values, not bytes).
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Single-line preview of a description for a table cell
pub fn description_preview(description: &str) -> String {
    truncate_chars(description, DESCRIPTION_PREVIEW_LEN).replace(['\n', '\r'], " ")
}

/// Format a price with a currency prefix and two decimals
///
/// # Examples
///
/// ```
/// use shared::util::format_price;
///
/// assert_eq!(format_price(9.99), "$9.99");
/// assert_eq!(format_price(0.0), "$0.00");
/// assert_eq!(format_price(1234.5), "$1234.50");
/// ```
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("abc", 50), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        // multi-byte characters must not be split
        assert_eq!(truncate_chars("ñandú", 4), "ñand");
    }

    #[test]
    fn test_description_preview() {
        let long = "x".repeat(80);
        assert_eq!(description_preview(&long).chars().count(), 50);
        assert_eq!(description_preview("línea 1\nlínea 2"), "línea 1 línea 2");
        assert_eq!(description_preview(""), "");
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        assert_eq!(format_price(2.005), "$2.00");
        assert_eq!(format_price(2.5), "$2.50");
        assert_eq!(format_price(-1.0), "$-1.00");
    }
}
