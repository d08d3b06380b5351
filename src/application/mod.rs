//! Application layer: counter operations over the store seam.

pub mod counter_service;

pub use counter_service::{CounterService, RetryPolicy};
