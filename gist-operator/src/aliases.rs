//! Alias set difference between an index and its definition.

use gist_operator_repository::AliasAction;
use serde_json::{Map, Value};

/// Aliases to detach from and attach to an index.
///
/// Aliases present on both sides are left alone, so `to_remove` and `to_add`
/// never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasDiff {
    /// Existing aliases missing from the definition, in existing order.
    pub to_remove: Vec<String>,
    /// Defined aliases the index does not have yet, in definition order.
    pub to_add: Vec<String>,
}

impl AliasDiff {
    /// Compare the aliases an index has with the ones it should have.
    pub fn compute(existing: &[String], desired: &Map<String, Value>) -> Self {
        let to_remove = existing
            .iter()
            .filter(|alias| !desired.contains_key(alias.as_str()))
            .cloned()
            .collect();

        let to_add = desired
            .keys()
            .filter(|alias| !existing.contains(alias))
            .cloned()
            .collect();

        Self { to_remove, to_add }
    }

    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty() && self.to_add.is_empty()
    }

    /// Build the alias update batch for `index`: removals first, then additions.
    ///
    /// Additions carry the alias options from `desired`.
    pub fn actions(&self, index: &str, desired: &Map<String, Value>) -> Vec<AliasAction> {
        let removals = self
            .to_remove
            .iter()
            .map(|alias| AliasAction::remove(index, alias.as_str()));

        let additions = self.to_add.iter().map(|alias| {
            let options = desired
                .get(alias)
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            AliasAction::add(index, alias.as_str(), options)
        });

        removals.chain(additions).collect()
    }
}
