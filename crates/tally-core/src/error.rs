//! Error types for the Tally core.

use thiserror::Error;

/// Validation failures raised while turning a raw document into a [`Receipt`].
///
/// Each variant names the offending field and states the expected format,
/// so the boundary can log a precise reason without inspecting the input
/// again. Exactly one error is produced per parse attempt (first failing
/// field wins).
///
/// [`Receipt`]: crate::Receipt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid retailer format: {0}. want alphanumeric characters, spaces, hyphens, and ampersands")]
    InvalidRetailer(String),

    #[error("invalid purchase date format: {0}. want YYYY-MM-DD format")]
    InvalidPurchaseDate(String),

    #[error("invalid purchase time format: {0}. want HH:MM format")]
    InvalidPurchaseTime(String),

    #[error("items must contain at least one item")]
    EmptyItems,

    #[error("invalid short description format at items.{index}: {value}. want alphanumeric characters, spaces, hyphens, and ampersands")]
    InvalidShortDescription { index: usize, value: String },

    #[error("invalid price format at items.{index}: {value}. want 0.00 format")]
    InvalidPrice { index: usize, value: String },

    #[error("price at items.{index} must be a positive number")]
    NegativePrice { index: usize },

    #[error("invalid total format: {0}. want 0.00 format")]
    InvalidTotal(String),

    #[error("total must be a positive number")]
    NegativeTotal,
}

impl ValidationError {
    /// The name of the field that failed validation, as it appears in the
    /// raw document. Item-level failures report the collection name.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidRetailer(_) => "retailer",
            ValidationError::InvalidPurchaseDate(_) => "purchaseDate",
            ValidationError::InvalidPurchaseTime(_) => "purchaseTime",
            ValidationError::EmptyItems
            | ValidationError::InvalidShortDescription { .. }
            | ValidationError::InvalidPrice { .. }
            | ValidationError::NegativePrice { .. } => "items",
            ValidationError::InvalidTotal(_) | ValidationError::NegativeTotal => "total",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_field_and_expectation() {
        let err = ValidationError::InvalidRetailer("Target!!!".into());
        assert_eq!(
            err.to_string(),
            "invalid retailer format: Target!!!. want alphanumeric characters, spaces, hyphens, and ampersands"
        );
        assert_eq!(err.field(), "retailer");

        let err = ValidationError::InvalidPurchaseDate("01-01-2022".into());
        assert_eq!(
            err.to_string(),
            "invalid purchase date format: 01-01-2022. want YYYY-MM-DD format"
        );
        assert_eq!(err.field(), "purchaseDate");

        let err = ValidationError::InvalidPrice {
            index: 2,
            value: "1.2".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid price format at items.2: 1.2. want 0.00 format"
        );
        assert_eq!(err.field(), "items");
    }

    #[test]
    fn test_missing_field_reports_name() {
        let err = ValidationError::MissingField("retailer");
        assert_eq!(err.to_string(), "missing required field: retailer");
        assert_eq!(err.field(), "retailer");
    }
}
