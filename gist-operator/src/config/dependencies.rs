//! Dependency initialization and wiring for the operator.

use std::sync::Arc;

use gist_operator_repository::{OpenSearchSessionFactory, SessionFactory};
use tracing::info;

use crate::config::OperatorConfig;
use crate::handler::ResourceHandler;
use crate::index::IndexReconciler;
use crate::template::TemplateReconciler;
use crate::OperatorError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Builds sessions for direct inspection calls.
    pub sessions: Arc<dyn SessionFactory>,
    /// Reconciles index resources.
    pub index_reconciler: IndexReconciler,
    /// Reconciles template resources.
    pub template_reconciler: TemplateReconciler,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See [`OperatorConfig::from_env`] for the variables read.
    pub fn new() -> Result<Self, OperatorError> {
        let config = OperatorConfig::from_env()?;

        info!(
            request_timeout_ms = config.request_timeout.as_millis() as u64,
            "Initializing dependencies"
        );

        let sessions = Arc::new(OpenSearchSessionFactory::new(config.connection()));
        Ok(Self::with_session_factory(sessions))
    }

    /// Wire the reconcilers around an existing session factory.
    pub fn with_session_factory(sessions: Arc<dyn SessionFactory>) -> Self {
        let handler = Arc::new(ResourceHandler::new(sessions.clone()));

        Self {
            sessions,
            index_reconciler: IndexReconciler::new(handler.clone()),
            template_reconciler: TemplateReconciler::new(handler),
        }
    }
}
