//! Resource, status and outcome types.

pub mod index;
pub mod outcome;
pub mod resource;
pub mod status;
pub mod template;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserialize an optional JSON object, treating `null` the same as a missing field.
pub(crate) fn nullable_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}
