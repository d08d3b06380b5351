//! In-process counter store for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::store::{CounterStore, StoreError};

/// A counter store backed by a process-local map.
///
/// Matches the Redis increment semantics: unseen keys start at zero and the
/// post-increment value is returned. Counts do not survive a restart, so this
/// backend is only suitable for tests and local development.
pub struct MemoryCounterStore {
    counters: Mutex<HashMap<String, i64>>,
}

impl MemoryCounterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the current value of `key` without incrementing it.
    ///
    /// Test-observation helper; the production store has no non-incrementing
    /// read.
    pub fn value(&self, key: &str) -> i64 {
        self.counters
            .lock()
            .expect("counter map poisoned")
            .get(key)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for MemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let mut counters = self.counters.lock().expect("counter map poisoned");
        let value = counters.entry(key.to_string()).or_insert(0);
        *value += 1;
        Ok(*value)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
