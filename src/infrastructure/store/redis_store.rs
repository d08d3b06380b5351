//! Redis-backed counter store.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, RedisError};
use tracing::{debug, info};

use crate::domain::store::{CounterStore, StoreError};

/// Redis implementation of [`CounterStore`].
///
/// Uses `ConnectionManager` for connection reuse across requests. Increments
/// go through the `INCR` primitive, which zero-initializes unseen keys and is
/// atomic under concurrent callers.
pub struct RedisCounterStore {
    client: ConnectionManager,
}

impl RedisCounterStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://redis:6379"`)
    /// - `socket_timeout` - applied to both connection establishment and
    ///   command responses; controlled via the `STORE_TIMEOUT_MS` env var
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, socket_timeout: Duration) -> Result<Self, StoreError> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(Some(socket_timeout))
            .set_response_timeout(Some(socket_timeout));

        let manager = ConnectionManager::new_with_config(client, config)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { client: manager })
    }
}

/// Maps a Redis error onto the store error taxonomy.
///
/// Refused, dropped, and timed-out connections form the retryable class;
/// everything else (wrong value type, malformed replies) is a protocol error.
fn classify(e: RedisError) -> StoreError {
    if e.is_connection_refusal() || e.is_connection_dropped() || e.is_timeout() || e.is_io_error() {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Protocol(e.to_string())
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn incr(&self, key: &str) -> Result<i64, StoreError> {
        let mut conn = self.client.clone();

        match conn.incr::<_, _, i64>(key, 1).await {
            Ok(value) => {
                debug!("INCR {} -> {}", key, value);
                Ok(value)
            }
            Err(e) => Err(classify(e)),
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redis::ErrorKind;

    fn io_error(kind: std::io::ErrorKind) -> RedisError {
        RedisError::from(std::io::Error::new(kind, "boom"))
    }

    #[test]
    fn connection_class_errors_are_retryable() {
        let err = classify(io_error(std::io::ErrorKind::ConnectionRefused));
        assert!(matches!(err, StoreError::Connection(_)));
        assert!(err.is_retryable());

        let err = classify(io_error(std::io::ErrorKind::TimedOut));
        assert!(matches!(err, StoreError::Connection(_)));
    }

    #[test]
    fn type_errors_surface_as_protocol() {
        let err = classify(RedisError::from((
            ErrorKind::UnexpectedReturnType,
            "value is not an integer",
        )));
        assert!(matches!(err, StoreError::Protocol(_)));
        assert!(!err.is_retryable());
    }
}
