// Configuration for the data service client

use crate::constants::DEFAULT_MAX_URI_LENGTH;

/// Configuration for the data service HTTP client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Server base address (e.g. "http://127.0.0.1:8080")
    pub server_url: String,
    /// Endpoint path below the server address (default: "DataServiceRest")
    pub endpoint_path: String,
    /// Upper bound for the total request URI length
    pub max_uri_length: usize,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".to_string(),
            endpoint_path: "DataServiceRest".to_string(),
            max_uri_length: DEFAULT_MAX_URI_LENGTH,
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    /// Create a new config for a single server address
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.to_string(),
            ..Default::default()
        }
    }

    /// Set the URI length limit of the target transport
    pub fn with_max_uri_length(mut self, max_uri_length: usize) -> Self {
        self.max_uri_length = max_uri_length;
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set the endpoint path below the server address
    pub fn with_endpoint_path(mut self, path: &str) -> Self {
        self.endpoint_path = path.to_string();
        self
    }
}
