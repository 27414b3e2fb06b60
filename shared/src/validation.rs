//! Input validation helpers
//!
//! The only rules are presence of a name and parseable numbers.

use crate::error::{AppError, AppResult, ErrorCode};

/// Validate that a required string is non-empty (whitespace-only is empty).
pub fn validate_required_text(value: &str, code: ErrorCode) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::new(code));
    }
    Ok(())
}

/// The product name must be present.
pub fn validate_product_name(name: &str) -> AppResult<()> {
    validate_required_text(name, ErrorCode::ProductNameRequired)
}

/// Parse the price field. Blank means 0.
///
/// Surrounding whitespace is ignored; NaN and infinities are rejected since
/// they have no JSON representation.
pub fn parse_price(raw: &str) -> AppResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(AppError::new(ErrorCode::ProductInvalidPrice)),
    }
}

/// Parse the stock field. Blank means 0.
pub fn parse_stock(raw: &str) -> AppResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<i64>()
        .map_err(|_| AppError::new(ErrorCode::ProductInvalidStock))
}
