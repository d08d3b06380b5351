use std::sync::Arc;

use crate::application::counter_service::CounterService;

/// Shared application state injected into all handlers.
///
/// Built once in [`crate::server::run`] and cloned per request; the counter
/// service is process-scoped and needs no teardown.
#[derive(Clone)]
pub struct AppState {
    pub counters: Arc<CounterService>,
}
