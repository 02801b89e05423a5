//! Connection factory trait.

use std::sync::Arc;

use crate::errors::ConnectionError;
use crate::interfaces::IndexAdmin;

/// Builds a short-lived administrative session from a list of host addresses.
///
/// A malformed address anywhere in the list fails the whole call. Sessions are
/// not pooled; each reconciliation builds its own.
pub trait SessionFactory: Send + Sync {
    fn create_session(&self, hosts: &[String]) -> Result<Arc<dyn IndexAdmin>, ConnectionError>;
}
