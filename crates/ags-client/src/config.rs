//! Client configuration.

use std::time::Duration;

/// Settings shared by every request an [`AgsHttpClient`](crate::AgsHttpClient) sends.
///
/// A fetch issues one request per page, so `timeout` bounds a single page,
/// not the whole result.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound for one page request, from connect to last body byte.
    pub timeout: Duration,
    /// Upper bound for establishing the connection to the ArcGIS host.
    pub connect_timeout: Duration,
    /// Sent as `User-Agent`; some hosted services reject requests without one.
    pub user_agent: String,
    /// Accept gzip/deflate encoded pages.
    pub compression: bool,
    /// Emit `tracing` events for every request and response.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: crate::USER_AGENT.to_string(),
            compression: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`], starting from its defaults.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Per-page request timeout (default 30 s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Connect timeout (default 10 s).
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Replace the default `arcgis-query/<version>` User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Accept compressed pages (on by default).
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.compression = enabled;
        self
    }

    /// Turn request/response tracing on or off.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
