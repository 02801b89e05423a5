//! Checks whether an index already has the desired mappings and settings.
//!
//! Used to skip put-mapping and put-settings calls that would not change
//! anything. Any doubt resolves to "not applied", which only costs a redundant
//! call.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Whether every entry of `desired` is present with an equal value in `live`.
///
/// Objects are compared recursively, so a live mapping may contain more fields
/// than the desired one.
pub fn mapping_applied(live: &Map<String, Value>, desired: &Map<String, Value>) -> bool {
    desired
        .iter()
        .all(|(key, value)| live.get(key).is_some_and(|l| contains(l, value)))
}

/// Whether every desired setting already has the same value on the index.
///
/// Both sides are flattened to dotted keys without the `index.` prefix and
/// compared as strings, since the cluster reports all setting values as
/// strings.
pub fn settings_applied(live: &Map<String, Value>, desired: &Map<String, Value>) -> bool {
    let live = flatten_settings(live);
    flatten_settings(desired)
        .iter()
        .all(|(key, value)| live.get(key).is_some_and(|l| same_scalar(l, value)))
}

fn contains(live: &Value, desired: &Value) -> bool {
    match (live, desired) {
        (Value::Object(live), Value::Object(desired)) => mapping_applied(live, desired),
        _ => same_scalar(live, desired),
    }
}

fn same_scalar(live: &Value, desired: &Value) -> bool {
    live == desired || matches!((as_text(live), as_text(desired)), (Some(l), Some(d)) if l == d)
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn flatten_settings(settings: &Map<String, Value>) -> BTreeMap<String, Value> {
    fn walk(prefix: &str, value: &Value, out: &mut BTreeMap<String, Value>) {
        match value {
            Value::Object(map) => {
                for (key, nested) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    walk(&path, nested, out);
                }
            }
            leaf => {
                let key = prefix.strip_prefix("index.").unwrap_or(prefix);
                out.insert(key.to_string(), leaf.clone());
            }
        }
    }

    let mut out = BTreeMap::new();
    for (key, value) in settings {
        walk(key, value, &mut out);
    }
    out
}
