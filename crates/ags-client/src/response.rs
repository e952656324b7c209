//! HTTP response handling with ArcGIS-specific extensions.

use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around an HTTP response that remembers the final request URL.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
    url: String,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        let url = inner.url().to_string();
        Self { inner, url }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is 200.
    ///
    /// ArcGIS answers every well-formed request with 200, so any other status
    /// (including other 2xx codes) is treated as a transport failure.
    pub fn is_ok(&self) -> bool {
        self.status() == 200
    }

    /// The full request URL, including the encoded query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Decode the body as JSON, failing with [`ErrorKind::Service`] when the
    /// body is an ArcGIS `{"error": {...}}` envelope.
    pub async fn service_json<T: DeserializeOwned>(self) -> Result<T> {
        let url = sanitize_url(&self.url);
        let body = self.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        if let Some(error) = value.get("error") {
            return Err(parse_service_error(error, url));
        }

        serde_json::from_value(value).map_err(Into::into)
    }
}

/// Extension trait for validating ArcGIS responses.
pub trait ResponseExt {
    /// Fail with [`ErrorKind::Http`] unless the status is 200.
    fn check_status(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_status(self) -> Result<Response> {
        if self.is_ok() {
            return Ok(self);
        }

        let status = self.status();
        let url = sanitize_url(&self.url);
        let body = self.text().await.unwrap_or_default();
        debug!(status, body = %sanitize_error_message(&body), "Rejected response body");

        Err(Error::new(ErrorKind::Http { status, url }))
    }
}

/// The `error` object of an ArcGIS JSON response.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct ServiceError {
    /// Numeric error code, usually mirroring an HTTP status.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Additional detail lines.
    #[serde(default)]
    pub details: Vec<String>,
}

fn parse_service_error(error: &serde_json::Value, url: String) -> Error {
    let parsed = serde_json::from_value::<ServiceError>(error.clone()).unwrap_or_else(|_| {
        ServiceError {
            code: None,
            message: error.to_string(),
            details: Vec::new(),
        }
    });

    Error::new(ErrorKind::Service {
        code: parsed.code,
        message: sanitize_error_message(&parsed.message),
        details: parsed
            .details
            .iter()
            .map(|d| sanitize_error_message(d))
            .collect(),
        url,
    })
}

static TOKEN_PARAM: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"(?i)([?&]token=)[^&#\s]+").expect("token pattern is valid")
});

/// Redact `token` query parameters from a URL before it is logged or stored
/// in an error.
pub fn sanitize_url(url: &str) -> String {
    TOKEN_PARAM.replace_all(url, "${1}[REDACTED]").to_string()
}

/// Sanitize an upstream message before it is logged or stored in an error.
///
/// Embedded URLs have their `token` parameter redacted and messages longer
/// than 500 characters are truncated.
pub fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = sanitize_url(message);

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
