//! One-shot command line front end.
//!
//! Reads a single resource document, runs one reconciliation (or fetches the
//! live state) and reports the result as JSON. There is no watching or retrying
//! here; that belongs to whatever schedules the operator.

use std::path::PathBuf;

use gist_operator_shared::{Resource, Status};
use serde_json::{json, Value};
use tracing::info;

use crate::config::Dependencies;
use crate::OperatorError;

/// Usage line printed on invalid arguments.
pub const USAGE: &str = "usage: gist-operator <apply|delete|inspect> <resource.json>";

/// What to do with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create or update the resource.
    Apply,
    /// Delete the resource.
    Delete,
    /// Print the live state of the resource.
    Inspect,
}

impl Action {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "apply" => Some(Self::Apply),
            "delete" => Some(Self::Delete),
            "inspect" => Some(Self::Inspect),
            _ => None,
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub path: PathBuf,
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse<I>(args: I) -> Result<Self, OperatorError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let (Some(action), Some(path), None) = (args.next(), args.next(), args.next()) else {
            return Err(OperatorError::usage(USAGE));
        };

        let action = Action::parse(&action)
            .ok_or_else(|| OperatorError::usage(format!("unknown action '{}'; {}", action, USAGE)))?;

        Ok(Self {
            action,
            path: PathBuf::from(path),
        })
    }
}

/// Result of running a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// JSON printed to stdout.
    pub output: Value,
    /// Whether the command achieved what it was asked to.
    pub success: bool,
}

/// Parse a resource document.
pub fn parse_resource(contents: &str) -> Result<Resource, OperatorError> {
    serde_json::from_str(contents).map_err(|e| OperatorError::parse(e.to_string()))
}

/// Run `action` against `resource`.
pub async fn execute(
    deps: &Dependencies,
    action: Action,
    resource: Resource,
) -> Result<Report, OperatorError> {
    info!(action = ?action, resource = %resource.name(), "Running command");

    match (action, resource) {
        (Action::Apply, Resource::Index(index)) => {
            let index = deps.index_reconciler.create_or_update(index).await;
            let success = index
                .status
                .as_ref()
                .is_some_and(|s| s.status == Status::Acknowledged);
            Ok(Report {
                output: to_output(&Resource::Index(index))?,
                success,
            })
        }
        (Action::Apply, Resource::Template(template)) => {
            let template = deps.template_reconciler.create_or_update(template).await;
            let success = template
                .status
                .as_ref()
                .is_some_and(|s| s.status == Status::Acknowledged);
            Ok(Report {
                output: to_output(&Resource::Template(template))?,
                success,
            })
        }
        (Action::Delete, Resource::Index(index)) => {
            let deleted = deps.index_reconciler.delete(&index).await;
            Ok(Report {
                output: json!({ "kind": "index", "name": index.name, "deleted": deleted }),
                success: deleted,
            })
        }
        (Action::Delete, Resource::Template(template)) => {
            let deleted = deps.template_reconciler.delete(&template).await;
            Ok(Report {
                output: json!({ "kind": "template", "name": template.name, "deleted": deleted }),
                success: deleted,
            })
        }
        (Action::Inspect, Resource::Index(index)) => {
            let admin = deps.sessions.create_session(&index.hosts)?;
            let output = if admin.index_exists(&index.name).await? {
                to_output(&admin.get_index(&index.name).await?)?
            } else {
                Value::Null
            };
            Ok(Report {
                output,
                success: true,
            })
        }
        (Action::Inspect, Resource::Template(template)) => {
            let admin = deps.sessions.create_session(&template.hosts)?;
            let output = admin
                .get_template(&template.name)
                .await?
                .unwrap_or(Value::Null);
            Ok(Report {
                output,
                success: true,
            })
        }
    }
}

fn to_output<T: serde::Serialize>(value: &T) -> Result<Value, OperatorError> {
    serde_json::to_value(value).map_err(|e| OperatorError::parse(e.to_string()))
}
