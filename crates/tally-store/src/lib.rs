//! # Tally Store
//!
//! Storage abstraction for the Tally points service: a mapping from opaque
//! receipt identifier to integer score, behind a capability trait with
//! atomic check-and-insert semantics.
//!
//! The shipped backend is [`MemoryStore`]; state lives for the process
//! lifetime only.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{InsertResult, PointsStore};
