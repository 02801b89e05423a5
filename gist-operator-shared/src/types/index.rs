//! Desired state of a search index.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::nullable_map;
use super::status::IndexStatus;

/// Settings that can only be given when an index is created.
///
/// The cluster rejects any update call that carries one of these keys, so they
/// are stripped before settings are sent to an existing index.
pub const IMMUTABLE_SETTINGS: [&str; 5] = [
    "number_of_shards",
    "shard.check_on_startup",
    "codec",
    "routing_partition_size",
    "load_fixed_bitset_filters_eagerly",
];

/// Settings, mappings and aliases an index should have.
///
/// All three sections are optional; a missing or `null` section is treated as
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexDefinition {
    #[serde(default, deserialize_with = "nullable_map")]
    pub settings: Map<String, Value>,
    #[serde(default, deserialize_with = "nullable_map")]
    pub mappings: Map<String, Value>,
    /// Alias name to alias options (filter, routing, ...).
    #[serde(default, deserialize_with = "nullable_map")]
    pub aliases: Map<String, Value>,
}

impl IndexDefinition {
    /// The subset of `settings` that may be changed on an existing index.
    pub fn dynamic_settings(&self) -> Map<String, Value> {
        self.settings
            .iter()
            .filter(|(key, _)| !IMMUTABLE_SETTINGS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// The full create-index request body.
    pub fn as_create_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("settings".to_string(), Value::Object(self.settings.clone()));
        body.insert("aliases".to_string(), Value::Object(self.aliases.clone()));
        body.insert("mappings".to_string(), Value::Object(self.mappings.clone()));
        Value::Object(body)
    }
}

/// An index as the scheduling framework hands it to the reconciler.
///
/// The reconciler reads `definition` and `hosts` and only ever writes `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredIndex {
    /// Name of the index in the cluster.
    pub name: String,
    #[serde(default)]
    pub definition: IndexDefinition,
    /// Cluster addresses, `scheme://host:port`.
    pub hosts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IndexStatus>,
}

impl DesiredIndex {
    pub fn new(name: impl Into<String>, definition: IndexDefinition, hosts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            definition,
            hosts,
            status: None,
        }
    }
}
