//! # Gist Operator
//!
//! Converges Elasticsearch indices and index templates to their desired
//! definitions and reports the result as a status on the resource.
//!
//! ## Architecture
//!
//! 1. **Handler**: opens a session and turns every outcome of one
//!    administrative operation into [`Outcome::Success`] or
//!    [`Outcome::Failed`]
//! 2. **Reconcilers**: decide which calls an index or template needs
//! 3. **Status**: projects the outcome onto the resource
//!
//! Scheduling (watching resources, queueing, retrying) is left to the caller.
//! At most one reconciliation per resource name is expected to run at a time.
//!
//! ## Modules
//!
//! - [`aliases`]: Alias set difference
//! - [`cli`]: One-shot command line front end
//! - [`config`]: Configuration and dependency initialization
//! - [`drift`]: Checks whether live mappings and settings already match
//! - [`errors`]: Error types for the binary
//! - [`handler`]: Execution wrapper
//! - [`index`]: Index reconciler
//! - [`status`]: Status projection
//! - [`template`]: Template reconciler

pub mod aliases;
pub mod cli;
pub mod config;
pub mod drift;
pub mod errors;
pub mod handler;
pub mod index;
pub mod status;
pub mod template;

pub use config::{Dependencies, OperatorConfig};
pub use errors::OperatorError;
pub use gist_operator_shared::Outcome;
pub use handler::{AdminRequest, ResourceHandler};
pub use index::IndexReconciler;
pub use template::TemplateReconciler;
