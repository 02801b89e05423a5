//! Desired state of an index template.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::nullable_map;
use super::status::TemplateStatus;

/// An index template as the scheduling framework hands it to the reconciler.
///
/// The definition is the complete template body. It is sent as-is and never
/// compared against what the cluster currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredTemplate {
    pub name: String,
    #[serde(default, deserialize_with = "nullable_map")]
    pub definition: Map<String, Value>,
    pub hosts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TemplateStatus>,
}

impl DesiredTemplate {
    pub fn new(name: impl Into<String>, definition: Map<String, Value>, hosts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            definition,
            hosts,
            status: None,
        }
    }
}
