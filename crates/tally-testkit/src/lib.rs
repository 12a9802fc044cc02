//! # Tally Testkit
//!
//! Testing utilities for the Tally workspace: fixture receipts with known
//! scores, and proptest generators for valid raw documents.

pub mod fixtures;
pub mod generators;

pub use fixtures::{corner_market_receipt, parse, raw_receipt, target_receipt, to_json, ScoredFixture};
