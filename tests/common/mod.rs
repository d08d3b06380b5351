#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use visit_counter::application::counter_service::{CounterService, RetryPolicy};
use visit_counter::domain::store::{CounterStore, StoreError};
use visit_counter::infrastructure::store::MemoryCounterStore;
use visit_counter::state::AppState;

/// Short retry policy so failure-path tests stay fast.
pub fn test_policy() -> RetryPolicy {
    RetryPolicy {
        attempts: 3,
        delay: Duration::from_millis(1),
    }
}

/// Builds handler-test state backed by an in-process store.
///
/// The store is returned alongside the state so tests can assert on raw
/// counter values.
pub fn create_test_state() -> (AppState, Arc<MemoryCounterStore>) {
    let store = Arc::new(MemoryCounterStore::new());
    let counters = Arc::new(CounterService::new(store.clone(), test_policy()));

    (AppState { counters }, store)
}

/// A store whose every call fails with a connectivity error.
pub struct UnreachableStore;

#[async_trait]
impl CounterStore for UnreachableStore {
    async fn incr(&self, _key: &str) -> Result<i64, StoreError> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Builds state whose store never answers, for error-path tests.
pub fn create_failing_state() -> AppState {
    let counters = Arc::new(CounterService::new(Arc::new(UnreachableStore), test_policy()));

    AppState { counters }
}
