//! Administrative verbs on indices and index templates.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::AdminError;
use crate::types::{AcknowledgedResponse, AliasAction, IndexState};

/// An open administrative session against one search cluster.
///
/// Each method performs exactly one request. Acknowledging verbs return the
/// flag as reported by the cluster; deciding what a `false` means is left to
/// the caller. Errors are classified into validation, I/O and remote-service
/// failures.
#[async_trait]
pub trait IndexAdmin: Send + Sync {
    /// Check whether an index with this name exists.
    async fn index_exists(&self, name: &str) -> Result<bool, AdminError>;

    /// Fetch the live aliases, settings and mappings of an index.
    async fn get_index(&self, name: &str) -> Result<IndexState, AdminError>;

    /// Create an index from a full `{settings, aliases, mappings}` body.
    async fn create_index(
        &self,
        name: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, AdminError>;

    /// Merge mappings into an existing index.
    async fn put_mapping(
        &self,
        name: &str,
        mappings: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError>;

    /// Update settings of an existing index.
    async fn put_settings(
        &self,
        name: &str,
        settings: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError>;

    /// Apply a batch of alias actions atomically.
    async fn update_aliases(
        &self,
        actions: &[AliasAction],
    ) -> Result<AcknowledgedResponse, AdminError>;

    /// Delete an index. A missing index is reported as a not-found remote error.
    async fn delete_index(&self, name: &str) -> Result<AcknowledgedResponse, AdminError>;

    /// Create or replace an index template.
    async fn put_template(
        &self,
        name: &str,
        body: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError>;

    /// Fetch an index template, `None` if it does not exist.
    async fn get_template(&self, name: &str) -> Result<Option<Value>, AdminError>;

    /// Delete an index template. A missing template is reported as a not-found
    /// remote error.
    async fn delete_template(&self, name: &str) -> Result<AcknowledgedResponse, AdminError>;
}
