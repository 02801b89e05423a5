//! # Gist Operator Shared
//!
//! This crate defines the desired-state resources the operator reconciles
//! (indices and index templates), the status record written back onto them,
//! and the two-valued outcome of a reconciliation call.

pub mod types;

pub use types::index::{DesiredIndex, IndexDefinition, IMMUTABLE_SETTINGS};
pub use types::outcome::Outcome;
pub use types::resource::Resource;
pub use types::status::{IndexStatus, ResourceStatus, Status, TemplateStatus};
pub use types::template::DesiredTemplate;
