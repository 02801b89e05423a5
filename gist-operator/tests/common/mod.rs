//! In-memory cluster and session factory shared by the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gist_operator::Dependencies;
use gist_operator_repository::{
    AcknowledgedResponse, AdminError, AliasAction, ConnectionError, IndexAdmin, IndexState,
    RemoteError, SessionFactory,
};
use gist_operator_shared::{DesiredIndex, DesiredTemplate, IndexDefinition, IMMUTABLE_SETTINGS};
use serde_json::{json, Map, Value};

pub const INDEX_EXISTS: &str = "index_exists";
pub const GET_INDEX: &str = "get_index";
pub const CREATE_INDEX: &str = "create_index";
pub const PUT_MAPPING: &str = "put_mapping";
pub const PUT_SETTINGS: &str = "put_settings";
pub const UPDATE_ALIASES: &str = "update_aliases";
pub const DELETE_INDEX: &str = "delete_index";
pub const PUT_TEMPLATE: &str = "put_template";
pub const GET_TEMPLATE: &str = "get_template";
pub const DELETE_TEMPLATE: &str = "delete_template";

/// A call received by the fake cluster.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    IndexExists(String),
    GetIndex(String),
    CreateIndex(String, Value),
    PutMapping(String, Map<String, Value>),
    PutSettings(String, Map<String, Value>),
    UpdateAliases(Vec<AliasAction>),
    DeleteIndex(String),
    PutTemplate(String, Map<String, Value>),
    GetTemplate(String),
    DeleteTemplate(String),
}

impl Call {
    pub fn verb(&self) -> &'static str {
        match self {
            Call::IndexExists(_) => INDEX_EXISTS,
            Call::GetIndex(_) => GET_INDEX,
            Call::CreateIndex(..) => CREATE_INDEX,
            Call::PutMapping(..) => PUT_MAPPING,
            Call::PutSettings(..) => PUT_SETTINGS,
            Call::UpdateAliases(_) => UPDATE_ALIASES,
            Call::DeleteIndex(_) => DELETE_INDEX,
            Call::PutTemplate(..) => PUT_TEMPLATE,
            Call::GetTemplate(_) => GET_TEMPLATE,
            Call::DeleteTemplate(_) => DELETE_TEMPLATE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeIndex {
    pub settings: Map<String, Value>,
    pub mappings: Map<String, Value>,
    pub aliases: BTreeMap<String, Value>,
}

#[derive(Default)]
struct ClusterState {
    indices: BTreeMap<String, FakeIndex>,
    templates: BTreeMap<String, Map<String, Value>>,
}

/// A cluster that keeps indices and templates in memory.
///
/// It enforces the rules the reconcilers depend on: field types cannot change,
/// creation-only settings cannot be updated, and missing resources are
/// reported as not found. Individual verbs can be made to fail or to return an
/// unacknowledged response.
#[derive(Default)]
pub struct FakeCluster {
    state: Mutex<ClusterState>,
    calls: Mutex<Vec<Call>>,
    unacknowledged: Mutex<HashSet<&'static str>>,
    failures: Mutex<HashMap<&'static str, AdminError>>,
}

impl FakeCluster {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Add an index directly, bypassing the recorded calls.
    pub fn seed_index(&self, name: &str, index: FakeIndex) {
        self.state
            .lock()
            .unwrap()
            .indices
            .insert(name.to_string(), index);
    }

    pub fn seed_template(&self, name: &str, body: Map<String, Value>) {
        self.state
            .lock()
            .unwrap()
            .templates
            .insert(name.to_string(), body);
    }

    pub fn index(&self, name: &str) -> Option<FakeIndex> {
        self.state.lock().unwrap().indices.get(name).cloned()
    }

    pub fn template(&self, name: &str) -> Option<Map<String, Value>> {
        self.state.lock().unwrap().templates.get(name).cloned()
    }

    pub fn alias_names(&self, name: &str) -> Vec<String> {
        self.index(name)
            .map(|index| index.aliases.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Make `verb` answer with `acknowledged: false`.
    pub fn unacknowledge(&self, verb: &'static str) {
        self.unacknowledged.lock().unwrap().insert(verb);
    }

    /// Make `verb` fail with `error`.
    pub fn fail(&self, verb: &'static str, error: AdminError) {
        self.failures.lock().unwrap().insert(verb, error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn verbs(&self) -> Vec<&'static str> {
        self.calls().iter().map(Call::verb).collect()
    }

    pub fn count(&self, verb: &str) -> usize {
        self.verbs().into_iter().filter(|v| *v == verb).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) -> Result<(), AdminError> {
        let verb = call.verb();
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().get(verb) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn ack(&self, verb: &'static str) -> AcknowledgedResponse {
        AcknowledgedResponse::new(!self.unacknowledged.lock().unwrap().contains(verb))
    }
}

fn not_found(error_type: &str, message: String) -> AdminError {
    AdminError::remote(RemoteError::new(
        Some(404),
        Some(error_type.to_string()),
        message,
    ))
}

fn bad_request(error_type: &str, message: String) -> AdminError {
    AdminError::remote(RemoteError::new(
        Some(400),
        Some(error_type.to_string()),
        message,
    ))
}

fn merge_mappings(
    live: &mut Map<String, Value>,
    update: &Map<String, Value>,
) -> Result<(), AdminError> {
    let empty = Map::new();
    let new_fields = update
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let live_fields = live
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    for (field, definition) in new_fields {
        if let Some(current) = live_fields.get(field) {
            let current_type = current.get("type");
            let merged_type = definition.get("type");
            if current_type != merged_type {
                return Err(bad_request(
                    "illegal_argument_exception",
                    format!(
                        "mapper [{}] of different type, current_type [{}], merged_type [{}]",
                        field,
                        current_type.and_then(Value::as_str).unwrap_or("object"),
                        merged_type.and_then(Value::as_str).unwrap_or("object"),
                    ),
                ));
            }
        }
    }

    let mut merged_fields = live_fields;
    for (field, definition) in new_fields {
        merged_fields.insert(field.clone(), definition.clone());
    }
    for (key, value) in update {
        if key != "properties" {
            live.insert(key.clone(), value.clone());
        }
    }
    if !merged_fields.is_empty() {
        live.insert("properties".to_string(), Value::Object(merged_fields));
    }
    Ok(())
}

#[async_trait]
impl IndexAdmin for FakeCluster {
    async fn index_exists(&self, name: &str) -> Result<bool, AdminError> {
        self.record(Call::IndexExists(name.to_string()))?;
        Ok(self.state.lock().unwrap().indices.contains_key(name))
    }

    async fn get_index(&self, name: &str) -> Result<IndexState, AdminError> {
        self.record(Call::GetIndex(name.to_string()))?;
        let state = self.state.lock().unwrap();
        let index = state
            .indices
            .get(name)
            .ok_or_else(|| not_found("index_not_found_exception", format!("no such index [{}]", name)))?;

        Ok(IndexState {
            aliases: index.aliases.keys().cloned().collect(),
            settings: index.settings.clone(),
            mappings: index.mappings.clone(),
        })
    }

    async fn create_index(
        &self,
        name: &str,
        body: &Value,
    ) -> Result<AcknowledgedResponse, AdminError> {
        self.record(Call::CreateIndex(name.to_string(), body.clone()))?;
        let mut state = self.state.lock().unwrap();
        if state.indices.contains_key(name) {
            return Err(bad_request(
                "resource_already_exists_exception",
                format!("index [{}] already exists", name),
            ));
        }

        let section = |key: &str| {
            body.get(key)
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default()
        };
        let index = FakeIndex {
            settings: section("settings"),
            mappings: section("mappings"),
            aliases: section("aliases").into_iter().collect(),
        };
        state.indices.insert(name.to_string(), index);
        Ok(self.ack(CREATE_INDEX))
    }

    async fn put_mapping(
        &self,
        name: &str,
        mappings: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError> {
        self.record(Call::PutMapping(name.to_string(), mappings.clone()))?;
        let mut state = self.state.lock().unwrap();
        let index = state
            .indices
            .get_mut(name)
            .ok_or_else(|| not_found("index_not_found_exception", format!("no such index [{}]", name)))?;

        merge_mappings(&mut index.mappings, mappings)?;
        Ok(self.ack(PUT_MAPPING))
    }

    async fn put_settings(
        &self,
        name: &str,
        settings: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError> {
        self.record(Call::PutSettings(name.to_string(), settings.clone()))?;
        if let Some(key) = settings
            .keys()
            .find(|key| IMMUTABLE_SETTINGS.contains(&key.as_str()))
        {
            return Err(bad_request(
                "illegal_argument_exception",
                format!("final index setting [index.{}], not updateable", key),
            ));
        }

        let mut state = self.state.lock().unwrap();
        let index = state
            .indices
            .get_mut(name)
            .ok_or_else(|| not_found("index_not_found_exception", format!("no such index [{}]", name)))?;
        for (key, value) in settings {
            index.settings.insert(key.clone(), value.clone());
        }
        Ok(self.ack(PUT_SETTINGS))
    }

    async fn update_aliases(
        &self,
        actions: &[AliasAction],
    ) -> Result<AcknowledgedResponse, AdminError> {
        self.record(Call::UpdateAliases(actions.to_vec()))?;
        let mut state = self.state.lock().unwrap();

        for action in actions {
            match action {
                AliasAction::Add {
                    index,
                    alias,
                    options,
                } => {
                    let target = state.indices.get_mut(index).ok_or_else(|| {
                        not_found("index_not_found_exception", format!("no such index [{}]", index))
                    })?;
                    target
                        .aliases
                        .insert(alias.clone(), Value::Object(options.clone()));
                }
                AliasAction::Remove { index, alias } => {
                    let target = state.indices.get_mut(index).ok_or_else(|| {
                        not_found("index_not_found_exception", format!("no such index [{}]", index))
                    })?;
                    if target.aliases.remove(alias).is_none() {
                        return Err(not_found(
                            "aliases_not_found_exception",
                            format!("aliases [{}] missing", alias),
                        ));
                    }
                }
            }
        }
        Ok(self.ack(UPDATE_ALIASES))
    }

    async fn delete_index(&self, name: &str) -> Result<AcknowledgedResponse, AdminError> {
        self.record(Call::DeleteIndex(name.to_string()))?;
        let mut state = self.state.lock().unwrap();
        if state.indices.remove(name).is_none() {
            return Err(not_found(
                "index_not_found_exception",
                format!("no such index [{}]", name),
            ));
        }
        Ok(self.ack(DELETE_INDEX))
    }

    async fn put_template(
        &self,
        name: &str,
        body: &Map<String, Value>,
    ) -> Result<AcknowledgedResponse, AdminError> {
        self.record(Call::PutTemplate(name.to_string(), body.clone()))?;
        if !body.contains_key("index_patterns") {
            return Err(AdminError::validation(["index patterns are missing"]));
        }
        self.state
            .lock()
            .unwrap()
            .templates
            .insert(name.to_string(), body.clone());
        Ok(self.ack(PUT_TEMPLATE))
    }

    async fn get_template(&self, name: &str) -> Result<Option<Value>, AdminError> {
        self.record(Call::GetTemplate(name.to_string()))?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .templates
            .get(name)
            .cloned()
            .map(Value::Object))
    }

    async fn delete_template(&self, name: &str) -> Result<AcknowledgedResponse, AdminError> {
        self.record(Call::DeleteTemplate(name.to_string()))?;
        let mut state = self.state.lock().unwrap();
        if state.templates.remove(name).is_none() {
            return Err(not_found(
                "index_template_missing_exception",
                format!("index_template [{}] missing", name),
            ));
        }
        Ok(self.ack(DELETE_TEMPLATE))
    }
}

/// Session factory handing out the same fake cluster for every session.
pub struct FakeSessions {
    cluster: Arc<FakeCluster>,
    error: Option<ConnectionError>,
    created: AtomicUsize,
}

impl FakeSessions {
    pub fn new(cluster: Arc<FakeCluster>) -> Arc<Self> {
        Arc::new(Self {
            cluster,
            error: None,
            created: AtomicUsize::new(0),
        })
    }

    pub fn failing(cluster: Arc<FakeCluster>, error: ConnectionError) -> Arc<Self> {
        Arc::new(Self {
            cluster,
            error: Some(error),
            created: AtomicUsize::new(0),
        })
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl SessionFactory for FakeSessions {
    fn create_session(&self, hosts: &[String]) -> Result<Arc<dyn IndexAdmin>, ConnectionError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        if hosts.is_empty() {
            return Err(ConnectionError::new("no hosts given"));
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(self.cluster.clone())
    }
}

/// Dependencies wired to a fresh fake cluster.
pub fn setup() -> (Arc<FakeCluster>, Dependencies) {
    let cluster = FakeCluster::new();
    let deps = Dependencies::with_session_factory(FakeSessions::new(cluster.clone()));
    (cluster, deps)
}

pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

pub fn hosts() -> Vec<String> {
    vec!["http://localhost:9200".to_string()]
}

/// The index used by the end-to-end scenarios.
pub fn test_index() -> DesiredIndex {
    DesiredIndex::new(
        "test",
        IndexDefinition {
            settings: object(json!({ "number_of_shards": "3" })),
            mappings: object(json!({
                "properties": { "keywordField": { "type": "keyword" } }
            })),
            aliases: object(json!({ "aliasTest": {} })),
        },
        hosts(),
    )
}

pub fn index_with(
    settings: Value,
    mappings: Value,
    aliases: Value,
) -> DesiredIndex {
    DesiredIndex::new(
        "test",
        IndexDefinition {
            settings: object(settings),
            mappings: object(mappings),
            aliases: object(aliases),
        },
        hosts(),
    )
}

pub fn test_template() -> DesiredTemplate {
    DesiredTemplate::new(
        "logs",
        object(json!({
            "index_patterns": ["logs-*"],
            "settings": { "number_of_shards": 1 }
        })),
        hosts(),
    )
}
