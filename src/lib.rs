//! # arcgis-query
//!
//! Client library for reading data from ArcGIS FeatureServer query endpoints.
//!
//! Queries are described once (output fields, filters, date fields, extra
//! parameters) and fetched completely: every page is requested in turn,
//! epoch-millisecond dates are converted, and single-feature results such as
//! statistics come back as one record.
//!
//! ## Security
//!
//! - `token` query parameters are redacted from logged and reported URLs
//! - Service error messages are sanitized and truncated before they are stored
//!
//! ## Crates
//!
//! - **arcgis-query-client** - Core HTTP client: timeouts, compression, status and service-error checks
//! - **arcgis-query-feature** - FeatureServer queries: filters, parameters, pagination, date fields
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arcgis_query::{FeatureQuery, FeatureServiceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeatureServiceClient::new()?;
//!
//!     let district = client
//!         .fetch(
//!             &FeatureQuery::new("https://services.arcgis.com/.../FeatureServer/0/query")
//!                 .out_fields(["BE_AKTUELL", "BE_VORTAG"])
//!                 .filter(("GEMEINDE", "=", "(gesamter Kreis)")),
//!         )
//!         .await?;
//!
//!     for record in district.records() {
//!         println!("{:?}", record.get_i64("BE_AKTUELL"));
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use arcgis_query_client as client;
#[cfg(feature = "feature")]
pub use arcgis_query_feature as feature;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use arcgis_query_client::{AgsHttpClient, ClientConfig};
#[cfg(feature = "feature")]
pub use arcgis_query_feature::{
    Error, ErrorKind, FeatureQuery, FeatureServiceClient, FieldValue, FilterExpression,
    ParamValue, Record, ResultSet,
};
