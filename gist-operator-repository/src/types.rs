//! Request and response types for administrative calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Acknowledgement flag returned by every mutating verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

impl AcknowledgedResponse {
    pub fn new(acknowledged: bool) -> Self {
        Self { acknowledged }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}

/// One entry in an alias update batch.
///
/// Serializes to the cluster's `{"add": {...}}` / `{"remove": {...}}` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasAction {
    Add {
        index: String,
        alias: String,
        /// Alias options such as `filter` or `routing`.
        #[serde(flatten)]
        options: Map<String, Value>,
    },
    Remove {
        index: String,
        alias: String,
    },
}

impl AliasAction {
    pub fn add(index: impl Into<String>, alias: impl Into<String>, options: Map<String, Value>) -> Self {
        Self::Add {
            index: index.into(),
            alias: alias.into(),
            options,
        }
    }

    pub fn remove(index: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Remove {
            index: index.into(),
            alias: alias.into(),
        }
    }

    /// The alias this action targets.
    pub fn alias(&self) -> &str {
        match self {
            Self::Add { alias, .. } | Self::Remove { alias, .. } => alias,
        }
    }
}

/// Live state of an index as reported by get-index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndexState {
    /// Names of the aliases pointing at the index.
    pub aliases: Vec<String>,
    pub settings: Map<String, Value>,
    pub mappings: Map<String, Value>,
}

impl IndexState {
    /// Extract the state of `name` from a get-index response body.
    ///
    /// The response is keyed by index name; a body without that key yields an
    /// empty state.
    pub fn from_response(name: &str, body: &Value) -> Self {
        let Some(entry) = body.get(name) else {
            return Self::default();
        };

        let section = |key: &str| {
            entry
                .get(key)
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default()
        };

        Self {
            aliases: section("aliases").keys().cloned().collect(),
            settings: section("settings"),
            mappings: section("mappings"),
        }
    }
}
