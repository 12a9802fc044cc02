//! Test fixtures and helpers.
//!
//! Common setup code for unit and integration tests, including the two
//! published example receipts with their known scores.

use tally_core::{RawItem, RawReceipt, Receipt};

/// Build a raw receipt from plain string parts.
pub fn raw_receipt(
    retailer: &str,
    purchase_date: &str,
    purchase_time: &str,
    items: &[(&str, &str)],
    total: &str,
) -> RawReceipt {
    RawReceipt {
        retailer: Some(retailer.to_string()),
        purchase_date: Some(purchase_date.to_string()),
        purchase_time: Some(purchase_time.to_string()),
        items: Some(
            items
                .iter()
                .map(|(desc, price)| RawItem::new(desc, price))
                .collect(),
        ),
        total: Some(total.to_string()),
    }
}

/// Parse a raw fixture, panicking on failure. Test-only convenience.
pub fn parse(raw: &RawReceipt) -> Receipt {
    Receipt::parse(raw).expect("fixture receipt is valid")
}

/// A raw receipt together with its expected score.
pub struct ScoredFixture {
    pub raw: RawReceipt,
    pub expected_points: u64,
}

/// The Target example receipt. Expected score: 28
/// (retailer 6, pairs 10, descriptions 6, odd day 6).
pub fn target_receipt() -> ScoredFixture {
    ScoredFixture {
        raw: raw_receipt(
            "Target",
            "2022-01-01",
            "13:01",
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        ),
        expected_points: 28,
    }
}

/// The M&M Corner Market example receipt. Expected score: 109
/// (retailer 14, round dollar 50, quarter 25, pairs 10, afternoon 10).
pub fn corner_market_receipt() -> ScoredFixture {
    ScoredFixture {
        raw: raw_receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            &[
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
                ("Gatorade", "2.25"),
            ],
            "9.00",
        ),
        expected_points: 109,
    }
}

/// Serialize a raw receipt to the JSON body the boundary accepts.
pub fn to_json(raw: &RawReceipt) -> String {
    serde_json::to_string(raw).expect("raw receipt serializes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::calculate_points;

    #[test]
    fn test_fixtures_score_as_documented() {
        for fixture in [target_receipt(), corner_market_receipt()] {
            let receipt = parse(&fixture.raw);
            assert_eq!(calculate_points(&receipt), fixture.expected_points);
        }
    }

    #[test]
    fn test_fixture_json_round_trips() {
        let fixture = target_receipt();
        let json = to_json(&fixture.raw);
        let decoded: tally_core::RawReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, fixture.raw);
    }
}
