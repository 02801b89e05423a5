//! Status written back onto a reconciled resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the last reconciliation was applied by the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Acknowledged,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Acknowledged => "Acknowledged",
            Status::Failed => "Failed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status record of an index or template.
///
/// Overwritten on every reconciliation; `message` is empty on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub status: Status,
    #[serde(default)]
    pub message: String,
}

impl ResourceStatus {
    pub fn acknowledged() -> Self {
        Self {
            status: Status::Acknowledged,
            message: String::new(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failed,
            message: message.into(),
        }
    }
}

pub type IndexStatus = ResourceStatus;
pub type TemplateStatus = ResourceStatus;
