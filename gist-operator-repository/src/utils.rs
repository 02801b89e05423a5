//! Utility functions for the gist operator repository.

use url::Url;

use crate::errors::ConnectionError;

/// Parse a host address of the form `scheme://host:port`.
///
/// A missing scheme defaults to `http`. Only `http` and `https` are accepted,
/// and the address must name a host. The port falls back to the scheme's
/// default when omitted.
///
/// # Example
///
/// ```
/// use gist_operator_repository::parse_host;
///
/// let url = parse_host("localhost:9200").expect("valid host");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_str(), Some("localhost"));
/// assert_eq!(url.port(), Some(9200));
/// ```
pub fn parse_host(host: &str) -> Result<Url, ConnectionError> {
    let trimmed = host.trim();
    if trimmed.is_empty() {
        return Err(ConnectionError::new("host address is empty"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let url = Url::parse(&candidate)
        .map_err(|e| ConnectionError::new(format!("invalid host '{}': {}", host, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConnectionError::new(format!(
            "invalid host '{}': unsupported scheme '{}'",
            host,
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConnectionError::new(format!(
            "invalid host '{}': missing hostname",
            host
        )));
    }

    Ok(url)
}
