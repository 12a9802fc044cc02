//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tally_core::{RawItem, RawReceipt};

/// Generate text matching the retailer/description character class:
/// alphanumerics, underscore, whitespace, hyphen, ampersand; non-empty.
pub fn name_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_& -]{1,32}".prop_map(String::from)
}

/// Generate an amount in canonical `0.00` form (no leading zeros), so the
/// text survives a parse/re-serialize round trip.
pub fn amount_text() -> impl Strategy<Value = String> {
    (0u32..=99_999, 0u8..=99).prop_map(|(dollars, cents)| format!("{dollars}.{cents:02}"))
}

/// Generate a `YYYY-MM-DD` date. Days stop at 28 so every month is valid.
pub fn date_text() -> impl Strategy<Value = String> {
    (1970i32..=2099, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Generate a 24-hour `HH:MM` time.
pub fn time_text() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

/// Generate a valid raw item.
pub fn valid_raw_item() -> impl Strategy<Value = RawItem> {
    (name_text(), amount_text()).prop_map(|(desc, price)| RawItem {
        short_description: Some(desc),
        price: Some(price),
    })
}

/// Generate a raw receipt that passes every validation rule.
pub fn valid_raw_receipt() -> impl Strategy<Value = RawReceipt> {
    (
        name_text(),
        date_text(),
        time_text(),
        prop::collection::vec(valid_raw_item(), 1..=8),
        amount_text(),
    )
        .prop_map(|(retailer, date, time, items, total)| RawReceipt {
            retailer: Some(retailer),
            purchase_date: Some(date),
            purchase_time: Some(time),
            items: Some(items),
            total: Some(total),
        })
}
