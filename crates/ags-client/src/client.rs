//! Core HTTP client with timeouts, response compression and ArcGIS status handling.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::{sanitize_url, Response, ResponseExt};

/// HTTP client for ArcGIS REST endpoints.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AgsHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl AgsHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(config.compression)
            .deflate(config.compression);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }

    /// Execute a request and return the response if its status is 200.
    #[instrument(skip(self, request), fields(url = %sanitize_url(&request.url)))]
    pub async fn execute(&self, request: &RequestBuilder) -> Result<Response> {
        let response = self.execute_once(request).await?;
        response.check_status().await
    }

    /// Execute a single request without status checks.
    async fn execute_once(&self, request: &RequestBuilder) -> Result<Response> {
        let url = url::Url::parse(&request.url)?;
        let mut req = self.inner.get(url);

        // Add query parameters
        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if self.config.enable_tracing {
            debug!(
                url = %sanitize_url(&request.url),
                params = request.query_params.len(),
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if status == 200 {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Ok(Response::new(response))
    }

    /// Execute a request and return the raw response.
    pub async fn send(&self, request: &RequestBuilder) -> Result<Response> {
        self.execute(request).await
    }

    /// Execute a request and deserialize the JSON response, surfacing an
    /// ArcGIS `error` body as [`ErrorKind::Service`].
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: &RequestBuilder,
    ) -> Result<T> {
        let response = self.execute(request).await?;
        response.service_json().await
    }
}
