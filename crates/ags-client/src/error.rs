//! Error types for ags-client.

/// Result type alias for ags-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ags-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the server answered with a non-200 status.
    pub fn is_http_status(&self) -> bool {
        matches!(self.kind, ErrorKind::Http { .. })
    }

    /// Returns true if the response body carried an ArcGIS `error` object.
    pub fn is_service_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Service { .. })
    }

    /// Returns the request URL recorded with the error, if any.
    pub fn request_url(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Http { url, .. } | ErrorKind::Service { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The server answered with a status other than 200.
    #[error("HTTP error: {status} for request {url}")]
    Http { status: u16, url: String },

    /// The service reported an `error` object in the response body.
    #[error(
        "Service error{}: '{message}' for request {url}",
        code.map(|c| format!(" {}", c)).unwrap_or_default()
    )]
    Service {
        code: Option<i64>,
        message: String,
        details: Vec<String>,
        url: String,
    },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
