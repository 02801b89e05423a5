//! OpenSearch implementation of the administrative interfaces.
//!
//! This module provides concrete implementations of `IndexAdmin` and
//! `SessionFactory` on top of the OpenSearch REST client. The index and
//! template APIs it uses are shared with Elasticsearch.

mod connection;
mod provider;
mod response;

pub use connection::{OpenSearchSessionFactory, RoundRobinConnectionPool};
pub use provider::OpenSearchAdmin;
