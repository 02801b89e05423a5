//! Envelope for reading either kind of resource from a single document.

use serde::{Deserialize, Serialize};

use super::index::DesiredIndex;
use super::template::DesiredTemplate;

/// A desired-state document, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Resource {
    Index(DesiredIndex),
    Template(DesiredTemplate),
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::Index(index) => &index.name,
            Resource::Template(template) => &template.name,
        }
    }
}
