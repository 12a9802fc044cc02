//! Field format validators: shape checks that run before any conversion.
//!
//! Format validation is strictly separated from type conversion: a string
//! that fails its shape check here never reaches numeric or date parsing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character class shared by retailer names and item descriptions:
/// alphanumerics, underscore, whitespace, hyphen, ampersand. Must be
/// non-empty.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\s\-&]+$").expect("name regex is valid"));

/// Fixed two-decimal-place amount: unsigned digits, a dot, exactly two
/// fractional digits. No leading sign, no thousands separators.
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d{2}$").expect("amount regex is valid"));

/// Check a retailer name or item description against the shared character
/// class.
pub fn is_valid_name(text: &str) -> bool {
    NAME_RE.is_match(text)
}

/// Check a price or total against the `0.00` amount format.
pub fn is_valid_amount(text: &str) -> bool {
    AMOUNT_RE.is_match(text)
}

/// Parse an amount that already passed [`is_valid_amount`].
///
/// Returns `None` if the text does not parse as a float, which cannot happen
/// for format-checked input; callers treat `None` as a format failure.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
