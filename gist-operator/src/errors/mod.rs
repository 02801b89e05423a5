//! Error types for the gist operator binary.

use gist_operator_repository::{AdminError, ConnectionError};
use thiserror::Error;

/// Errors that stop the command line tool.
///
/// Reconciliation itself never fails with an error; a failed reconciliation is
/// reported through [`OperatorError::ReconcileError`] after its status has been
/// printed.
#[derive(Error, Debug)]
pub enum OperatorError {
    /// Invalid command line.
    #[error("Usage error: {0}")]
    UsageError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The resource file could not be read.
    #[error("File error: {0}")]
    FileError(String),

    /// The resource file is not a valid resource.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A session could not be built.
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// A direct administrative call failed.
    #[error(transparent)]
    Admin(#[from] AdminError),

    /// The reconciliation finished with a failed status.
    #[error("Reconciliation failed: {0}")]
    ReconcileError(String),
}

impl OperatorError {
    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::UsageError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a file error.
    pub fn file(msg: impl Into<String>) -> Self {
        Self::FileError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a reconciliation error.
    pub fn reconcile(msg: impl Into<String>) -> Self {
        Self::ReconcileError(msg.into())
    }
}
