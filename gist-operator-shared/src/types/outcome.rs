//! Two-valued result of one reconciliation call.

/// Outcome of running one administrative operation against the cluster.
///
/// Failures are values, not errors: the reason is a human readable message that
/// ends up in the status of the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(String),
}

impl Outcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The failure reason, `None` on success.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failed(reason) => Some(reason),
        }
    }
}
