//! In-memory implementation of the PointsStore trait.
//!
//! All data is lost when the store is dropped; lifetime equals process
//! lifetime. Thread-safe via RwLock.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{InsertResult, PointsStore};

/// In-memory points store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, u64>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PointsStore for MemoryStore {
    async fn insert(&self, id: &str, points: u64) -> Result<InsertResult> {
        let mut inner = self.inner.write().unwrap();

        // The existence check and the write happen under one write lock,
        // which is what makes this a check-and-insert.
        if inner.contains_key(id) {
            return Ok(InsertResult::AlreadyExists);
        }

        inner.insert(id.to_string(), points);
        tracing::debug!(id, points, "stored points entry");
        Ok(InsertResult::Inserted)
    }

    async fn get(&self, id: &str) -> Result<Option<u64>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.get(id).copied())
    }
}
