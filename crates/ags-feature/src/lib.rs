//! # ags-feature
//!
//! Query client for ArcGIS FeatureServer (and MapServer) layer endpoints.
//!
//! ## Features
//!
//! - **Filters** - Build SQL-like `WHERE` clauses from field/comparator/value triples
//! - **Parameters** - Assemble the `/query` parameter set, composite values encoded as JSON
//! - **Pagination** - Fetch every page of a result, by re-sending or with opt-in offsets
//! - **Date fields** - Convert epoch-millisecond attributes into timestamps
//! - **Simplification** - Collapse single-feature results (e.g. statistics) into one record
//!
//! ## Example
//!
//! ```rust,ignore
//! use arcgis_query_feature::{FeatureQuery, FeatureServiceClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), arcgis_query_feature::Error> {
//!     let client = FeatureServiceClient::new()?;
//!
//!     // Aggregate query: the service answers with one feature.
//!     let sum = client
//!         .fetch(
//!             &FeatureQuery::new("https://services7.arcgis.com/.../RKI_COVID19/FeatureServer/0/query")
//!                 .filter("NeuerFall IN(1,-1)")
//!                 .param(
//!                     "outStatistics",
//!                     json!([{
//!                         "statisticType": "sum",
//!                         "onStatisticField": "AnzahlFall",
//!                         "outStatisticFieldName": "value"
//!                     }]),
//!                 ),
//!         )
//!         .await?;
//!
//!     println!("{:?}", sum.single().and_then(|r| r.get_i64("value")));
//!     Ok(())
//! }
//! ```

mod client;
mod dates;
mod error;
mod filter;
mod page;
mod params;
mod query;
mod record;
mod result;

// Main client
pub use client::FeatureServiceClient;

// Error types
pub use error::{Error, ErrorKind, Result};

// Query building
pub use filter::{where_clause, FilterExpression, FilterValue, MATCH_ALL};
pub use params::{assemble_params, ParamValue, Scalar, OUT_SPATIAL_REFERENCE};
pub use query::{FeatureQuery, DEFAULT_BATCH_SIZE};

// Pagination
pub use page::{EmptyPage, Feature, FeaturePage, Paging, Termination};

// Results
pub use dates::{from_epoch_millis, normalize_date_fields};
pub use record::{FieldValue, Record};
pub use result::ResultSet;

// HTTP configuration
pub use arcgis_query_client::{ClientConfig, ClientConfigBuilder};
