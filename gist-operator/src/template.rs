//! Template reconciler.
//!
//! Templates are replaced wholesale on every reconciliation; their definition
//! is never compared with what the cluster holds.

use std::sync::Arc;

use async_trait::async_trait;
use gist_operator_repository::{AcknowledgedResponse, AdminError, IndexAdmin};
use gist_operator_shared::DesiredTemplate;
use tracing::{info, instrument};

use crate::handler::{AdminRequest, ResourceHandler};
use crate::status::project_status;

/// Reconciles [`DesiredTemplate`] resources.
pub struct TemplateReconciler {
    handler: Arc<ResourceHandler>,
}

impl TemplateReconciler {
    pub fn new(handler: Arc<ResourceHandler>) -> Self {
        Self { handler }
    }

    /// Put the full template definition and record the outcome in its status.
    #[instrument(skip_all, fields(resource = %template.name))]
    pub async fn create_or_update(&self, mut template: DesiredTemplate) -> DesiredTemplate {
        let outcome = self
            .handler
            .handle(&template.hosts, &PutTemplate { template: &template })
            .await;

        template.status = Some(project_status(&outcome));
        template
    }

    /// Delete the template. Returns `true` if it is gone, including when it
    /// never existed.
    #[instrument(skip_all, fields(resource = %template.name))]
    pub async fn delete(&self, template: &DesiredTemplate) -> bool {
        self.handler
            .handle(&template.hosts, &DeleteTemplate { name: &template.name })
            .await
            .is_success()
    }
}

struct PutTemplate<'a> {
    template: &'a DesiredTemplate,
}

#[async_trait]
impl<'a> AdminRequest for PutTemplate<'a> {
    async fn execute(&self, admin: &dyn IndexAdmin) -> Result<AcknowledgedResponse, AdminError> {
        info!("Upserting template");
        admin
            .put_template(&self.template.name, &self.template.definition)
            .await
    }
}

struct DeleteTemplate<'a> {
    name: &'a str,
}

#[async_trait]
impl<'a> AdminRequest for DeleteTemplate<'a> {
    async fn execute(&self, admin: &dyn IndexAdmin) -> Result<AcknowledgedResponse, AdminError> {
        info!(template = %self.name, "Deleting template");

        match admin.delete_template(self.name).await {
            Err(e) if e.is_not_found() => {
                info!("Template does not exist, nothing to delete");
                Ok(AcknowledgedResponse::new(true))
            }
            other => other,
        }
    }
}
