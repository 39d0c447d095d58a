//! Service configuration from environment variables.

use std::time::Duration;

/// Default HTTP port.
const DEFAULT_PORT: u16 = 8080;

/// Default traversal deadline.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default request body limit, large enough for routes of a few hundred
/// thousand vertices.
const DEFAULT_MAX_BODY_BYTES: usize = 30_000_000;

/// Runtime configuration for the linear referencing service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// HTTP server port.
    pub port: u16,
    /// How long a single traversal may run before it is cancelled.
    pub request_timeout: Duration,
    /// Indent JSON response bodies.
    pub pretty_json: bool,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            pretty_json: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServiceConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LINREF_PORT` | HTTP server port | 8080 |
    /// | `LINREF_REQUEST_TIMEOUT_MS` | Traversal deadline in milliseconds | 30000 |
    /// | `LINREF_PRETTY_JSON` | Indent JSON responses ("true" or "1") | false |
    /// | `LINREF_MAX_BODY_BYTES` | Request body limit in bytes | 30000000 |
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("LINREF_PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        let request_timeout = lookup("LINREF_REQUEST_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);

        let pretty_json = lookup("LINREF_PRETTY_JSON")
            .map(|s| s.trim().eq_ignore_ascii_case("true") || s.trim() == "1")
            .unwrap_or(defaults.pretty_json);

        let max_body_bytes = lookup("LINREF_MAX_BODY_BYTES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_body_bytes);

        Self {
            port,
            request_timeout,
            pretty_json,
            max_body_bytes,
        }
    }

    /// Set the HTTP port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the traversal deadline.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Enable or disable indented JSON output.
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Set the request body limit in bytes.
    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }
}
