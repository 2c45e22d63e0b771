//! Transport seam between the client and the HTTP layer
//!
//! The splitting and capability logic only needs a narrow interface to
//! the transport: dispatch one physical request, and report the length
//! limits that constrain request building. Keeping this behind a trait
//! lets tests drive the client with a recording transport.
//!
//! There is no retry or failover here: a failed physical request fails
//! the logical operation it belongs to.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{DataServiceError, Result};
use crate::request::{HttpMethod, RestRequest};

/// External collaborator issuing physical requests
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one physical request and parses the JSON response
    async fn dispatch<T: DeserializeOwned + Send>(
        &self,
        request: RestRequest,
        cancel: &CancellationToken,
    ) -> Result<T>;

    /// Issues one physical request, ignoring the response body
    async fn send(&self, request: RestRequest, cancel: &CancellationToken) -> Result<()>;

    /// Configured upper bound on the total request URI length
    fn max_request_length(&self) -> usize;

    /// Length of the service base address, part of every request's fixed
    /// overhead
    fn base_address_length(&self) -> usize;
}

/// HTTP transport for the data service, based on reqwest
pub struct HttpTransport {
    client: Client,
    service_location: Url,
    max_uri_length: usize,
}

impl HttpTransport {
    /// Create a new transport for the configured server
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        let base = Url::parse(&config.server_url)?;
        // The endpoint must end in '/' so relative request paths resolve
        // below it instead of replacing it.
        let endpoint = format!("{}/", config.endpoint_path.trim_matches('/'));
        let service_location = base.join(&endpoint)?;

        Ok(Self {
            client,
            service_location,
            max_uri_length: config.max_uri_length,
        })
    }

    /// Absolute location of the service endpoint
    pub fn service_location(&self) -> &Url {
        &self.service_location
    }

    fn build_url(&self, request: &RestRequest) -> Result<Url> {
        let mut url = self.service_location.join(&request.path)?;
        let query = request.query();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    async fn execute(&self, request: RestRequest) -> Result<Response> {
        let url = self.build_url(&request)?;
        debug!(method = ?request.method, %url, "dispatching request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "server returned error status");
            Err(DataServiceError::Server {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn dispatch<T: DeserializeOwned + Send>(
        &self,
        request: RestRequest,
        cancel: &CancellationToken,
    ) -> Result<T> {
        tokio::select! {
            _ = cancel.cancelled() => Err(DataServiceError::Cancelled),
            result = async {
                let response = self.execute(request).await?;
                Ok(response.json::<T>().await?)
            } => result,
        }
    }

    async fn send(&self, request: RestRequest, cancel: &CancellationToken) -> Result<()> {
        tokio::select! {
            _ = cancel.cancelled() => Err(DataServiceError::Cancelled),
            result = async {
                self.execute(request).await?;
                Ok(())
            } => result,
        }
    }

    fn max_request_length(&self) -> usize {
        self.max_uri_length
    }

    fn base_address_length(&self) -> usize {
        self.service_location.as_str().len()
    }
}
