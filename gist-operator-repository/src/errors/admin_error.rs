//! Classified errors of administrative calls.

use std::fmt;

use thiserror::Error;

/// Error types the cluster uses to say a resource does not exist.
const NOT_FOUND_TYPES: [&str; 2] = ["index_not_found_exception", "resource_not_found_exception"];

/// A session could not be built from the configured hosts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Could not create client: {0}")]
pub struct ConnectionError(pub String);

impl ConnectionError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// The cluster accepted a request but refused to apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    /// HTTP status of the response, if there was one.
    pub status: Option<u16>,
    /// Error type reported by the cluster, e.g. `illegal_argument_exception`.
    pub error_type: Option<String>,
    /// Detailed message.
    pub message: String,
}

impl RemoteError {
    pub fn new(status: Option<u16>, error_type: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error_type,
            message: message.into(),
        }
    }

    /// The request returned `acknowledged: false`.
    pub fn not_acknowledged(msg: impl Into<String>) -> Self {
        Self::new(None, None, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(Some(404), None, msg)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
            || self
                .error_type
                .as_deref()
                .is_some_and(|t| NOT_FOUND_TYPES.contains(&t))
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_type {
            Some(error_type) => write!(f, "[{}] {}", error_type, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Errors from a single administrative verb.
///
/// The Display form of each variant starts with a tag naming its class; these
/// strings end up verbatim in resource statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminError {
    /// The request was rejected before it was applied, e.g. malformed settings.
    #[error("Validation failed: [{}]", .0.join(", "))]
    Validation(Vec<String>),

    /// The cluster could not be reached or its response could not be read.
    #[error("IO failed: {message}{}", format_cause(.cause))]
    Io {
        message: String,
        cause: Option<String>,
    },

    /// The cluster rejected the request or did not acknowledge it.
    #[error("Elasticsearch failed: {0}")]
    Remote(RemoteError),
}

fn format_cause(cause: &Option<String>) -> String {
    cause.as_ref().map(|c| format!(" {}", c)).unwrap_or_default()
}

impl AdminError {
    /// Create a validation error from one or more messages.
    pub fn validation<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation(messages.into_iter().map(Into::into).collect())
    }

    /// Create an I/O error.
    pub fn io(msg: impl Into<String>, cause: Option<String>) -> Self {
        Self::Io {
            message: msg.into(),
            cause,
        }
    }

    /// Create a remote-service error.
    pub fn remote(error: RemoteError) -> Self {
        Self::Remote(error)
    }

    /// Create the error for an unacknowledged request.
    pub fn not_acknowledged(msg: impl Into<String>) -> Self {
        Self::Remote(RemoteError::not_acknowledged(msg))
    }

    /// Whether the cluster reported that the target does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote(remote) if remote.is_not_found())
    }
}

impl From<RemoteError> for AdminError {
    fn from(err: RemoteError) -> Self {
        Self::Remote(err)
    }
}
