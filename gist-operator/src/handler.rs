//! Execution wrapper for administrative operations.
//!
//! Every reconciliation step goes through [`ResourceHandler::handle`], which
//! opens a session, runs one [`AdminRequest`] and folds whatever happens into
//! an [`Outcome`]. There are no retries; a failed attempt is reported and the
//! caller decides when to try again.

use std::sync::Arc;

use async_trait::async_trait;
use gist_operator_repository::{AcknowledgedResponse, AdminError, IndexAdmin, SessionFactory};
use gist_operator_shared::Outcome;
use tracing::{error, info};

/// One administrative operation, run against an open session.
///
/// Implementations may issue several calls; the returned acknowledgement
/// decides the outcome. An unacknowledged response counts as a remote-service
/// failure.
#[async_trait]
pub trait AdminRequest: Send + Sync {
    async fn execute(&self, admin: &dyn IndexAdmin) -> Result<AcknowledgedResponse, AdminError>;
}

/// Runs administrative operations and normalizes their outcome.
pub struct ResourceHandler {
    sessions: Arc<dyn SessionFactory>,
}

impl ResourceHandler {
    pub fn new(sessions: Arc<dyn SessionFactory>) -> Self {
        Self { sessions }
    }

    /// Open a session on `hosts` and run `request` once.
    ///
    /// Returns [`Outcome::Success`] only if the request completed and was
    /// acknowledged. Any failure yields [`Outcome::Failed`] with a reason
    /// starting with its class: could not create client, validation failed,
    /// IO failed or Elasticsearch failed. The request is not run when the
    /// session cannot be built.
    pub async fn handle(&self, hosts: &[String], request: &dyn AdminRequest) -> Outcome {
        let admin = match self.sessions.create_session(hosts) {
            Ok(admin) => admin,
            Err(e) => {
                error!(error = %e, "Could not create client");
                return Outcome::failed(e.to_string());
            }
        };

        let result = request
            .execute(admin.as_ref())
            .await
            .and_then(|response| {
                if response.is_acknowledged() {
                    Ok(())
                } else {
                    Err(AdminError::not_acknowledged("not acknowledged"))
                }
            });

        match result {
            Ok(()) => {
                info!("Success");
                Outcome::Success
            }
            Err(e) => {
                log_failure(&e);
                Outcome::failed(e.to_string())
            }
        }
    }
}

fn log_failure(err: &AdminError) {
    match err {
        AdminError::Validation(messages) => {
            error!(errors = ?messages, "Validation failed");
        }
        AdminError::Io { message, cause } => {
            error!(message = %message, cause = ?cause, "IO failed");
        }
        AdminError::Remote(remote) => {
            error!(status = ?remote.status, detail = %remote, "Elasticsearch failed");
        }
    }
}
