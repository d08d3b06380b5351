//! Counter store backends.
//!
//! Provides two implementations of [`crate::domain::store::CounterStore`]:
//! - [`RedisCounterStore`] - Production Redis backend
//! - [`MemoryCounterStore`] - In-process backend for tests and local development

mod memory_store;
mod redis_store;

pub use memory_store::MemoryCounterStore;
pub use redis_store::RedisCounterStore;
