//! Store seam for counter persistence.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// The two classes drive the retry decision: only [`StoreError::Connection`]
/// is transient and worth another attempt. Protocol-class failures (wrong
/// value type, malformed reply) would fail identically on retry and surface
/// immediately.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached, the connection dropped, or the call
    /// timed out within the configured socket timeout.
    #[error("counter store unreachable: {0}")]
    Connection(String),

    /// Any non-connectivity failure reported by the store.
    #[error("counter store protocol error: {0}")]
    Protocol(String),
}

impl StoreError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Trait for the external counter store.
///
/// Implementations must be thread-safe; the atomicity of [`incr`] under
/// concurrent callers is the store's guarantee, not the caller's.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisCounterStore`] - Redis `INCR` backend
/// - [`crate::infrastructure::store::MemoryCounterStore`] - in-process backend
///   for tests and local development
///
/// [`incr`]: CounterStore::incr
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increments `key` by one and returns the new value.
    ///
    /// Unseen keys start at zero, so the first increment returns 1.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] when the store is unreachable or
    /// the call times out, [`StoreError::Protocol`] for anything else.
    async fn incr(&self, key: &str) -> Result<i64, StoreError>;

    /// Checks if the store is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
