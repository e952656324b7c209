//! Error types for ags-feature.
//!
//! Every variant is terminal for the fetch in progress: nothing is retried and
//! no partial result set is returned.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// The endpoint answered with a status other than 200, or could not be
    /// reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Transport { .. } | ErrorKind::Timeout | ErrorKind::Connection(_)
        )
    }

    /// The service reported an `error` object for the query.
    pub fn is_upstream_query(&self) -> bool {
        matches!(self.kind, ErrorKind::UpstreamQuery { .. })
    }

    /// A page came back without features.
    pub fn is_empty_result(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyResult { .. })
    }

    /// The (token-redacted) request URL of the failing page, if known.
    pub fn request_url(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Transport { url, .. }
            | ErrorKind::UpstreamQuery { url, .. }
            | ErrorKind::EmptyResult { url } => Some(url),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Transport error: HTTP {status} for request {url}")]
    Transport { status: u16, url: String },

    #[error("Error '{message}' for request {url}")]
    UpstreamQuery {
        message: String,
        code: Option<i64>,
        details: Vec<String>,
        url: String,
    },

    #[error("Empty dataset for request {url}")]
    EmptyResult { url: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Date field '{field}' holds a non-numeric value: {value}")]
    DateField { field: String, value: String },

    #[error("Client error: {0}")]
    Client(String),
}

impl From<arcgis_query_client::Error> for Error {
    fn from(err: arcgis_query_client::Error) -> Self {
        use arcgis_query_client::ErrorKind as ClientKind;

        let kind = match &err.kind {
            ClientKind::Http { status, url } => ErrorKind::Transport {
                status: *status,
                url: url.clone(),
            },
            ClientKind::Service {
                code,
                message,
                details,
                url,
            } => ErrorKind::UpstreamQuery {
                message: message.clone(),
                code: *code,
                details: details.clone(),
                url: url.clone(),
            },
            ClientKind::Timeout => ErrorKind::Timeout,
            ClientKind::Connection(msg) => ErrorKind::Connection(msg.clone()),
            ClientKind::InvalidUrl(msg) => {
                ErrorKind::InvalidQuery(format!("invalid endpoint URL: {}", msg))
            }
            _ => ErrorKind::Client(err.to_string()),
        };

        Error { kind, source: Some(Box::new(err)) }
    }
}
