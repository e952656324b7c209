//! HTTP request building for ArcGIS REST endpoints.

/// Builder for a GET request against an ArcGIS REST endpoint.
///
/// Query parameters keep their insertion order on the wire.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) query_params: Vec<(String, String)>,
}

impl RequestBuilder {
    /// Create a new GET request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query_params: Vec::new(),
        }
    }

    /// Get the target URL (without query parameters).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the query parameters added so far.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Add every pair of an iterator as query parameters.
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query_params
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}
