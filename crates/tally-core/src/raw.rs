//! The raw receipt document: every scalar field as text.
//!
//! This is the intermediate representation between the wire format and the
//! typed [`Receipt`]. All fields are optional so that a missing field can be
//! reported distinctly from a malformed one; none of the values have been
//! checked yet.
//!
//! [`Receipt`]: crate::Receipt

use serde::{Deserialize, Serialize};

/// One untyped line entry of a raw receipt document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,

    pub price: Option<String>,
}

/// An untyped receipt document as received from the boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReceipt {
    pub retailer: Option<String>,

    #[serde(rename = "purchaseDate")]
    pub purchase_date: Option<String>,

    #[serde(rename = "purchaseTime")]
    pub purchase_time: Option<String>,

    pub items: Option<Vec<RawItem>>,

    pub total: Option<String>,
}

impl RawItem {
    /// Convenience constructor used by fixtures and tests.
    pub fn new(short_description: &str, price: &str) -> Self {
        Self {
            short_description: Some(short_description.to_string()),
            price: Some(price.to_string()),
        }
    }
}
