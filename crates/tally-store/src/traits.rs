//! Store trait: the abstract interface for points persistence.
//!
//! This trait keeps the boundary storage-agnostic. The shipped
//! implementation is in-memory; the contract is written so a durable
//! backend could replace it without touching the callers.

use async_trait::async_trait;

use crate::error::Result;

/// Result of inserting a points entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// The entry was inserted.
    Inserted,
    /// An entry with this identifier already exists. The existing value was
    /// left untouched.
    AlreadyExists,
}

/// The points store: a mapping from opaque receipt identifier to score.
///
/// # Design Notes
///
/// - **Check-and-insert**: [`insert`](PointsStore::insert) is atomic and
///   never overwrites. A duplicate identifier is reported as
///   [`InsertResult::AlreadyExists`]; callers decide how severe that is
///   (for randomly generated identifiers it indicates an internal fault).
/// - **No eviction**: entries live for the lifetime of the store.
#[async_trait]
pub trait PointsStore: Send + Sync {
    /// Insert a points entry if and only if `id` is not already present.
    async fn insert(&self, id: &str, points: u64) -> Result<InsertResult>;

    /// Look up the points for an identifier, if present.
    async fn get(&self, id: &str) -> Result<Option<u64>>;
}
