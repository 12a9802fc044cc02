//! The typed receipt: the validated domain object points are computed from.
//!
//! A [`Receipt`] is constructed atomically from a [`RawReceipt`]: either every
//! field passes its format and range checks, or parsing fails with a single
//! [`ValidationError`] and no partial object is exposed. Once constructed it
//! is immutable.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::raw::{RawItem, RawReceipt};
use crate::validation::{is_valid_amount, is_valid_name, parse_amount};

/// Textual format for purchase dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Textual format for purchase times (24-hour).
pub const TIME_FORMAT: &str = "%H:%M";

/// One validated line entry of a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    short_description: String,
    price: f64,
}

impl Item {
    /// The item's description, exactly as supplied (untrimmed).
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// The item's price. Always `>= 0`.
    pub fn price(&self) -> f64 {
        self.price
    }

    fn parse(index: usize, raw: &RawItem) -> Result<Self, ValidationError> {
        let description = raw
            .short_description
            .as_deref()
            .ok_or(ValidationError::MissingField("shortDescription"))?;
        if !is_valid_name(description) {
            return Err(ValidationError::InvalidShortDescription {
                index,
                value: description.to_string(),
            });
        }

        let price_text = raw
            .price
            .as_deref()
            .ok_or(ValidationError::MissingField("price"))?;
        if !is_valid_amount(price_text) {
            return Err(ValidationError::InvalidPrice {
                index,
                value: price_text.to_string(),
            });
        }
        let price = parse_amount(price_text).ok_or_else(|| ValidationError::InvalidPrice {
            index,
            value: price_text.to_string(),
        })?;
        if price < 0.0 {
            return Err(ValidationError::NegativePrice { index });
        }

        Ok(Self {
            short_description: description.to_string(),
            price,
        })
    }

    fn to_raw(&self) -> RawItem {
        RawItem {
            short_description: Some(self.short_description.clone()),
            price: Some(format!("{:.2}", self.price)),
        }
    }
}

/// A validated purchase receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    retailer: String,
    purchase_date: NaiveDate,
    purchase_time: NaiveTime,
    items: Vec<Item>,
    total: f64,
}

impl Receipt {
    /// Parse a raw document into a validated receipt.
    ///
    /// Fields are checked in declaration order: retailer, purchaseDate,
    /// purchaseTime, items (each item: shortDescription, then price), total.
    /// The first failing field short-circuits; when several fields are
    /// invalid, the earliest one in that order is the one reported. For each
    /// field the shape check runs before any numeric or date conversion.
    pub fn parse(raw: &RawReceipt) -> Result<Self, ValidationError> {
        let retailer = raw
            .retailer
            .as_deref()
            .ok_or(ValidationError::MissingField("retailer"))?;
        if !is_valid_name(retailer) {
            return Err(ValidationError::InvalidRetailer(retailer.to_string()));
        }

        let date_text = raw
            .purchase_date
            .as_deref()
            .ok_or(ValidationError::MissingField("purchaseDate"))?;
        let purchase_date = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidPurchaseDate(date_text.to_string()))?;

        let time_text = raw
            .purchase_time
            .as_deref()
            .ok_or(ValidationError::MissingField("purchaseTime"))?;
        let purchase_time = NaiveTime::parse_from_str(time_text, TIME_FORMAT)
            .map_err(|_| ValidationError::InvalidPurchaseTime(time_text.to_string()))?;

        let raw_items = raw
            .items
            .as_deref()
            .ok_or(ValidationError::MissingField("items"))?;
        if raw_items.is_empty() {
            return Err(ValidationError::EmptyItems);
        }
        let mut items = Vec::with_capacity(raw_items.len());
        for (index, raw_item) in raw_items.iter().enumerate() {
            items.push(Item::parse(index, raw_item)?);
        }

        let total_text = raw
            .total
            .as_deref()
            .ok_or(ValidationError::MissingField("total"))?;
        if !is_valid_amount(total_text) {
            return Err(ValidationError::InvalidTotal(total_text.to_string()));
        }
        let total = parse_amount(total_text)
            .ok_or_else(|| ValidationError::InvalidTotal(total_text.to_string()))?;
        if total < 0.0 {
            return Err(ValidationError::NegativeTotal);
        }

        Ok(Self {
            retailer: retailer.to_string(),
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }

    /// The retailer name.
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// The purchase date.
    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    /// The purchase time (24-hour, minute resolution).
    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    /// The validated line items. Never empty.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The receipt total. Always `>= 0`.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Re-serialize the receipt into its raw textual form.
    ///
    /// Dates, times, and amounts come back in the exact formats the parser
    /// accepts, so a parsed receipt reproduces the text it was built from.
    pub fn to_raw(&self) -> RawReceipt {
        RawReceipt {
            retailer: Some(self.retailer.clone()),
            purchase_date: Some(self.purchase_date.format(DATE_FORMAT).to_string()),
            purchase_time: Some(self.purchase_time.format(TIME_FORMAT).to_string()),
            items: Some(self.items.iter().map(Item::to_raw).collect()),
            total: Some(format!("{:.2}", self.total)),
        }
    }
}

impl TryFrom<RawReceipt> for Receipt {
    type Error = ValidationError;

    fn try_from(raw: RawReceipt) -> Result<Self, Self::Error> {
        Receipt::parse(&raw)
    }
}
