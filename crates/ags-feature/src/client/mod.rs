//! FeatureServer query client.
//!
//! This client wraps `AgsHttpClient` from `ags-client` and turns a
//! [`FeatureQuery`](crate::FeatureQuery) into a complete, post-processed
//! [`ResultSet`](crate::ResultSet).

use arcgis_query_client::{AgsHttpClient, ClientConfig};

use crate::error::Result;

mod fetch;

/// Client for ArcGIS FeatureServer/MapServer query endpoints.
///
/// The client holds no per-query state and can be reused for any number of
/// endpoints and queries.
///
/// # Example
///
/// ```rust,ignore
/// use arcgis_query_feature::{FeatureQuery, FeatureServiceClient};
///
/// let client = FeatureServiceClient::new()?;
///
/// let refresh = client
///     .fetch(
///         &FeatureQuery::new("https://example.com/arcgis/rest/services/Dashboard/MapServer/5/query")
///             .out_fields(["DATUM"])
///             .date_fields(["DATUM"]),
///     )
///     .await?;
///
/// let updated = refresh.single().and_then(|r| r.get_datetime("DATUM"));
/// ```
#[derive(Debug, Clone)]
pub struct FeatureServiceClient {
    http: AgsHttpClient,
}

impl FeatureServiceClient {
    /// Create a client with the default HTTP configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration (timeouts, User-Agent, ...).
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = AgsHttpClient::new(config)?;
        Ok(Self { http })
    }

    /// Create a client from an existing HTTP client.
    pub fn from_client(http: AgsHttpClient) -> Self {
        Self { http }
    }

    /// Get the underlying HTTP client.
    pub fn inner(&self) -> &AgsHttpClient {
        &self.http
    }
}
