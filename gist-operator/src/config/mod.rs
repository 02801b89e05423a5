//! Configuration and dependency initialization.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::time::Duration;

use gist_operator_repository::config::DEFAULT_REQUEST_TIMEOUT;
use gist_operator_repository::ConnectionConfig;
use tracing::warn;

use crate::OperatorError;

/// Environment variable holding the per-request timeout in milliseconds.
pub const REQUEST_TIMEOUT_ENV: &str = "GIST_REQUEST_TIMEOUT_MS";

/// Operator configuration.
#[derive(Debug, Clone)]
pub struct OperatorConfig {
    /// Timeout applied to every administrative request.
    pub request_timeout: Duration,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl OperatorConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GIST_REQUEST_TIMEOUT_MS`: Request timeout in milliseconds (default: 1000)
    pub fn from_env() -> Result<Self, OperatorError> {
        Self::from_timeout_value(env::var(REQUEST_TIMEOUT_ENV).ok())
    }

    /// Build the configuration from a raw timeout value.
    ///
    /// A value that is not a number falls back to the default; zero is
    /// rejected.
    pub fn from_timeout_value(value: Option<String>) -> Result<Self, OperatorError> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };

        match raw.trim().parse::<u64>() {
            Ok(0) => Err(OperatorError::config(format!(
                "{} must be greater than zero",
                REQUEST_TIMEOUT_ENV
            ))),
            Ok(millis) => Ok(Self {
                request_timeout: Duration::from_millis(millis),
            }),
            Err(_) => {
                warn!(
                    value = %raw,
                    "Invalid {}, using the default", REQUEST_TIMEOUT_ENV
                );
                Ok(Self::default())
            }
        }
    }

    /// Connection settings for the session factory.
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig::with_request_timeout(self.request_timeout)
    }
}
