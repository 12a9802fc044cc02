//! # Tally Core
//!
//! Pure logic for the Tally receipt points service: parsing an untyped
//! receipt document into a validated [`Receipt`], and scoring it.
//!
//! This crate contains no I/O, no storage, no networking. Both operations
//! are pure transformations, safe for unlimited concurrent use:
//!
//! - [`Receipt::parse`] - raw all-string document in, validated receipt or
//!   a single field-level [`ValidationError`] out
//! - [`calculate_points`] - validated receipt in, non-negative integer
//!   score out, composed from seven independent rules
//!
//! ## Validation design
//!
//! The wire document arrives with every scalar as text ([`RawReceipt`]).
//! Shape checks (character class, `0.00` amount format) run first; only
//! text that passes its shape check reaches date/number conversion. The
//! first failing field is reported and parsing stops.

pub mod error;
pub mod points;
pub mod raw;
pub mod receipt;
pub mod validation;

pub use error::ValidationError;
pub use points::{
    afternoon_points, calculate_points, description_points, item_pair_points, odd_day_points,
    quarter_points, retailer_points, round_dollar_points,
};
pub use raw::{RawItem, RawReceipt};
pub use receipt::{Item, Receipt, DATE_FORMAT, TIME_FORMAT};
