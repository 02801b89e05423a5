//! OpenSearch administrative session.
//!
//! This module provides the concrete implementation of `IndexAdmin` using the
//! OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::indices::{
    IndicesCreateParts, IndicesDeleteParts, IndicesDeleteTemplateParts, IndicesExistsParts,
    IndicesGetParts, IndicesGetTemplateParts, IndicesPutMappingParts, IndicesPutSettingsParts,
    IndicesPutTemplateParts,
};
use opensearch::OpenSearch;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::errors::AdminError;
use crate::interfaces::IndexAdmin;
use crate::opensearch::response::{
    acknowledged, error_from_response, json_body, transport_error,
};
use crate::types::{AcknowledgedResponse, AliasAction, IndexState};

/// Administrative session backed by an OpenSearch client.
///
/// Built by [`OpenSearchSessionFactory`](crate::OpenSearchSessionFactory); each
/// method issues exactly one REST request.
pub struct OpenSearchAdmin {
    client: OpenSearch,
}

impl OpenSearchAdmin {
    pub fn new(client: OpenSearch) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IndexAdmin for OpenSearchAdmin {
    async fn index_exists(&self, name: &str) -> Result<bool, AdminError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[name]))
            .send()
            .await
            .map_err(transport_error)?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            _ => Err(error_from_response(response).await),
        }
    }

    async fn get_index(&self, name: &str) -> Result<IndexState, AdminError> {
        let response = self
            .client
            .indices()
            .get(IndicesGetParts::Index(&[name]))
            .send()
            .await
            .map_err(transport_error)?;

        let body = json_body(response).await?;
        Ok(IndexState::from_response(name, &body))
    }

    async fn create_index(
        &self,
        name: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, AdminError> {
        debug!(index = %name, "Sending create index request");
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(name))
            .body(body.clone())
            .send()
            .await
            .map_err(transport_error)?;

        acknowledged(response).await
    }

    async fn put_mapping(
        &self,
        name: &str,
        mappings: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError> {
        debug!(index = %name, "Sending put mapping request");
        let response = self
            .client
            .indices()
            .put_mapping(IndicesPutMappingParts::Index(&[name]))
            .body(Value::Object(mappings.clone()))
            .send()
            .await
            .map_err(transport_error)?;

        acknowledged(response).await
    }

    async fn put_settings(
        &self,
        name: &str,
        settings: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError> {
        debug!(index = %name, "Sending put settings request");
        let response = self
            .client
            .indices()
            .put_settings(IndicesPutSettingsParts::Index(&[name]))
            .body(Value::Object(settings.clone()))
            .send()
            .await
            .map_err(transport_error)?;

        acknowledged(response).await
    }

    async fn update_aliases(
        &self,
        actions: &[AliasAction],
    ) -> Result<AcknowledgedResponse, AdminError> {
        debug!(action_count = actions.len(), "Sending update aliases request");
        let response = self
            .client
            .indices()
            .update_aliases()
            .body(json!({ "actions": actions }))
            .send()
            .await
            .map_err(transport_error)?;

        acknowledged(response).await
    }

    async fn delete_index(&self, name: &str) -> Result<AcknowledgedResponse, AdminError> {
        debug!(index = %name, "Sending delete index request");
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[name]))
            .send()
            .await
            .map_err(transport_error)?;

        acknowledged(response).await
    }

    async fn put_template(
        &self,
        name: &str,
        body: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError> {
        debug!(template = %name, "Sending put template request");
        let response = self
            .client
            .indices()
            .put_template(IndicesPutTemplateParts::Name(name))
            .body(Value::Object(body.clone()))
            .send()
            .await
            .map_err(transport_error)?;

        acknowledged(response).await
    }

    async fn get_template(&self, name: &str) -> Result<Option<Value>, AdminError> {
        let response = self
            .client
            .indices()
            .get_template(IndicesGetTemplateParts::Name(&[name]))
            .send()
            .await
            .map_err(transport_error)?;

        // 404 means the template does not exist
        if response.status_code().as_u16() == 404 {
            return Ok(None);
        }

        let body = json_body(response).await?;
        Ok(body.get(name).cloned())
    }

    async fn delete_template(&self, name: &str) -> Result<AcknowledgedResponse, AdminError> {
        debug!(template = %name, "Sending delete template request");
        let response = self
            .client
            .indices()
            .delete_template(IndicesDeleteTemplateParts::Name(name))
            .send()
            .await
            .map_err(transport_error)?;

        acknowledged(response).await
    }
}
