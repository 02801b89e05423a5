//! Projection of a reconciliation outcome onto a resource status.

use gist_operator_shared::{Outcome, ResourceStatus};

/// Map an outcome to the status persisted on the resource.
///
/// Applied the same way to indices and templates; the result replaces any
/// previous status.
pub fn project_status(outcome: &Outcome) -> ResourceStatus {
    match outcome {
        Outcome::Success => ResourceStatus::acknowledged(),
        Outcome::Failed(reason) => ResourceStatus::failed(reason.clone()),
    }
}
