//! Index reconciler.
//!
//! Creates an index in one call when it does not exist. When it does, the
//! mapping, the dynamic settings and the aliases are brought in line one after
//! the other, stopping at the first step the cluster does not acknowledge.

use std::sync::Arc;

use async_trait::async_trait;
use gist_operator_repository::{AcknowledgedResponse, AdminError, AliasAction, IndexAdmin};
use gist_operator_shared::DesiredIndex;
use tracing::{debug, info, instrument};

use crate::aliases::AliasDiff;
use crate::drift::{mapping_applied, settings_applied};
use crate::handler::{AdminRequest, ResourceHandler};
use crate::status::project_status;

/// Reconciles [`DesiredIndex`] resources.
pub struct IndexReconciler {
    handler: Arc<ResourceHandler>,
}

impl IndexReconciler {
    pub fn new(handler: Arc<ResourceHandler>) -> Self {
        Self { handler }
    }

    /// Create the index or converge an existing one, and record the outcome in
    /// its status.
    #[instrument(skip_all, fields(resource = %index.name))]
    pub async fn create_or_update(&self, mut index: DesiredIndex) -> DesiredIndex {
        let outcome = self
            .handler
            .handle(&index.hosts, &UpsertIndex { index: &index })
            .await;

        index.status = Some(project_status(&outcome));
        index
    }

    /// Delete the index. Returns `true` if it is gone, including when it never
    /// existed.
    #[instrument(skip_all, fields(resource = %index.name))]
    pub async fn delete(&self, index: &DesiredIndex) -> bool {
        self.handler
            .handle(&index.hosts, &DeleteIndex { name: &index.name })
            .await
            .is_success()
    }
}

/// Create-or-update of a single index.
struct UpsertIndex<'a> {
    index: &'a DesiredIndex,
}

#[async_trait]
impl<'a> AdminRequest for UpsertIndex<'a> {
    async fn execute(&self, admin: &dyn IndexAdmin) -> Result<AcknowledgedResponse, AdminError> {
        let name = self.index.name.as_str();
        info!("Upserting index");

        if admin.index_exists(name).await? {
            info!("Index already exists, updating");
            update_index(admin, self.index).await?;
            return Ok(AcknowledgedResponse::new(true));
        }

        info!("Creating index");
        admin
            .create_index(name, &self.index.definition.as_create_body())
            .await
    }
}

async fn update_index(admin: &dyn IndexAdmin, index: &DesiredIndex) -> Result<(), AdminError> {
    let name = index.name.as_str();
    let definition = &index.definition;
    let live = admin.get_index(name).await?;

    if !definition.mappings.is_empty() {
        if mapping_applied(&live.mappings, &definition.mappings) {
            debug!("Mapping already applied");
        } else {
            info!("Updating mapping");
            let response = admin.put_mapping(name, &definition.mappings).await?;
            if !response.is_acknowledged() {
                info!("Updating mapping not acknowledged");
                return Err(AdminError::not_acknowledged("mapping not acknowledged"));
            }
        }
    }

    let dynamic_settings = definition.dynamic_settings();
    if !dynamic_settings.is_empty() {
        if settings_applied(&live.settings, &dynamic_settings) {
            debug!("Settings already applied");
        } else {
            info!("Updating settings");
            let response = admin.put_settings(name, &dynamic_settings).await?;
            if !response.is_acknowledged() {
                info!("Updating settings not acknowledged");
                return Err(AdminError::not_acknowledged("settings not acknowledged"));
            }
        }
    }

    info!("Updating aliases");
    let actions = AliasDiff::compute(&live.aliases, &definition.aliases)
        .actions(name, &definition.aliases);
    for action in &actions {
        match action {
            AliasAction::Remove { .. } => info!(alias = %action.alias(), "Removing alias"),
            AliasAction::Add { .. } => info!(alias = %action.alias(), "Adding alias"),
        }
    }

    if actions.is_empty() {
        debug!("Aliases unchanged");
        return Ok(());
    }

    let response = admin.update_aliases(&actions).await?;
    if !response.is_acknowledged() {
        info!("Updating aliases not acknowledged");
        return Err(AdminError::not_acknowledged("aliases not acknowledged"));
    }

    Ok(())
}

/// Idempotent delete of a single index.
struct DeleteIndex<'a> {
    name: &'a str,
}

#[async_trait]
impl<'a> AdminRequest for DeleteIndex<'a> {
    async fn execute(&self, admin: &dyn IndexAdmin) -> Result<AcknowledgedResponse, AdminError> {
        info!("Deleting index");

        match admin.delete_index(self.name).await {
            Err(e) if e.is_not_found() => {
                info!("Index does not exist, nothing to delete");
                Ok(AcknowledgedResponse::new(true))
            }
            other => other,
        }
    }
}
