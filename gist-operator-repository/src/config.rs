//! Configuration for sessions opened against the search cluster.

use std::time::Duration;

/// Default timeout for a single administrative request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration applied to every session the factory builds.
///
/// Sessions are short-lived; a low timeout keeps one unreachable cluster from
/// stalling a reconciliation cycle.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Upper bound for connecting to a node and reading its response.
    pub request_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ConnectionConfig {
    /// Create a config with a custom request timeout.
    pub fn with_request_timeout(request_timeout: Duration) -> Self {
        Self { request_timeout }
    }
}
