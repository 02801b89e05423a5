//! Session factory for OpenSearch clusters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use opensearch::http::transport::{
    Connection, ConnectionPool, SingleNodeConnectionPool, TransportBuilder,
};
use opensearch::OpenSearch;
use tracing::debug;
use url::Url;

use crate::config::ConnectionConfig;
use crate::errors::ConnectionError;
use crate::interfaces::{IndexAdmin, SessionFactory};
use crate::opensearch::provider::OpenSearchAdmin;
use crate::utils::parse_host;

/// Builds [`OpenSearchAdmin`] sessions.
///
/// Building a session parses the host list and sets up the transport; it does
/// not talk to the cluster.
///
/// # Example
///
/// ```
/// use gist_operator_repository::{ConnectionConfig, OpenSearchSessionFactory, SessionFactory};
///
/// let factory = OpenSearchSessionFactory::new(ConnectionConfig::default());
/// let session = factory.create_session(&["http://localhost:9200".to_string()]);
/// assert!(session.is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenSearchSessionFactory {
    config: ConnectionConfig,
}

impl OpenSearchSessionFactory {
    pub fn new(config: ConnectionConfig) -> Self {
        Self { config }
    }

    /// Build a client for the given hosts.
    ///
    /// One host uses a single-node pool, several hosts a round-robin pool.
    pub fn create_client(&self, hosts: &[String]) -> Result<OpenSearch, ConnectionError> {
        let urls = hosts
            .iter()
            .map(|host| parse_host(host))
            .collect::<Result<Vec<_>, _>>()?;

        let builder = match urls.len() {
            0 => return Err(ConnectionError::new("no hosts given")),
            1 => TransportBuilder::new(SingleNodeConnectionPool::new(urls[0].clone())),
            _ => TransportBuilder::new(RoundRobinConnectionPool::new(urls)),
        };

        let transport = builder
            .disable_proxy()
            .timeout(self.config.request_timeout)
            .build()
            .map_err(|e| ConnectionError::new(e.to_string()))?;

        debug!(
            hosts = ?hosts,
            timeout_ms = self.config.request_timeout.as_millis() as u64,
            "Created OpenSearch client"
        );

        Ok(OpenSearch::new(transport))
    }
}

/// Connection pool that cycles through a fixed list of nodes.
///
/// Clones share the cursor, so every request of a session moves it forward.
#[derive(Debug, Clone)]
pub struct RoundRobinConnectionPool {
    urls: Vec<Url>,
    next: Arc<AtomicUsize>,
}

impl RoundRobinConnectionPool {
    /// `urls` must not be empty.
    pub fn new(urls: Vec<Url>) -> Self {
        Self {
            urls,
            next: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Address of the node the next request goes to.
    pub fn next_url(&self) -> &Url {
        let position = self.next.fetch_add(1, Ordering::Relaxed);
        &self.urls[position % self.urls.len()]
    }
}

impl ConnectionPool for RoundRobinConnectionPool {
    fn next(&self) -> Connection {
        Connection::new(self.next_url().clone())
    }
}

impl SessionFactory for OpenSearchSessionFactory {
    fn create_session(&self, hosts: &[String]) -> Result<Arc<dyn IndexAdmin>, ConnectionError> {
        let client = self.create_client(hosts)?;
        Ok(Arc::new(OpenSearchAdmin::new(client)))
    }
}
