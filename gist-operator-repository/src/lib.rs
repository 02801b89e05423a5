//! # Gist Operator Repository
//!
//! This crate provides the administrative boundary to the search cluster: the
//! verbs the reconcilers issue, the factory that opens a session from a list of
//! host addresses, the classified errors every verb can fail with, and a
//! concrete implementation for OpenSearch/Elasticsearch REST endpoints.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;
pub mod utils;

pub use config::ConnectionConfig;
pub use errors::{AdminError, ConnectionError, RemoteError};
pub use interfaces::{IndexAdmin, SessionFactory};
pub use opensearch::{OpenSearchAdmin, OpenSearchSessionFactory, RoundRobinConnectionPool};
pub use types::{AcknowledgedResponse, AliasAction, IndexState};
pub use utils::parse_host;
