//! # ags-client
//!
//! Core HTTP client infrastructure for ArcGIS REST query endpoints.
//!
//! This crate provides the foundational HTTP client with:
//! - Configurable request and connect timeouts
//! - Compression support (gzip, deflate)
//! - Connection pooling
//! - Status and service-error classification (ArcGIS reports query failures
//!   as an `error` object inside an HTTP 200 body)
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (ags-feature: filters, pagination, date fields)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    AgsHttpClient                            │
//! │  - Raw HTTP with compression and timeouts                   │
//! │  - Request building with query parameters                   │
//! │  - Typed JSON decoding with service-error detection         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use arcgis_query_client::{AgsHttpClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), arcgis_query_client::Error> {
//!     let client = AgsHttpClient::new(ClientConfig::default())?;
//!
//!     let body: serde_json::Value = client
//!         .send_json(
//!             &client
//!                 .get("https://services.arcgis.com/.../FeatureServer/0/query")
//!                 .query("where", "1=1")
//!                 .query("f", "json"),
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::AgsHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::RequestBuilder;
pub use response::{sanitize_error_message, sanitize_url, Response, ResponseExt, ServiceError};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("arcgis-query/", env!("CARGO_PKG_VERSION"));
