//! Feature query description.

use std::collections::BTreeMap;

use crate::error::{Error, ErrorKind, Result};
use crate::filter::{where_clause, FilterExpression};
use crate::page::{EmptyPage, Paging, Termination};
use crate::params::{assemble_params, ParamValue};

/// Default number of features requested per page.
pub const DEFAULT_BATCH_SIZE: usize = 5000;

/// Everything needed to fetch the complete result of one query.
///
/// A query owns its extra parameters; nothing is shared between queries.
///
/// # Example
///
/// ```
/// use arcgis_query_feature::FeatureQuery;
///
/// let query = FeatureQuery::new("https://example.com/arcgis/rest/services/Cases/FeatureServer/0/query")
///     .out_fields(["BE_AKTUELL", "BE_VORTAG", "ST_AKTUELL"])
///     .filter(("GEMEINDE", "=", "(gesamter Kreis)"));
///
/// assert_eq!(query.where_clause(), "GEMEINDE = '(gesamter Kreis)'");
/// assert_eq!(query.batch_size(), 5000);
/// ```
#[derive(Debug, Clone)]
pub struct FeatureQuery {
    url: String,
    out_fields: Vec<String>,
    filters: Vec<FilterExpression>,
    date_fields: Vec<String>,
    batch_size: usize,
    params: BTreeMap<String, ParamValue>,
    paging: Paging,
    termination: Termination,
    empty_page: EmptyPage,
}

impl FeatureQuery {
    /// Creates a query against a `.../FeatureServer/<layer>/query` endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            out_fields: Vec::new(),
            filters: Vec::new(),
            date_fields: Vec::new(),
            batch_size: DEFAULT_BATCH_SIZE,
            params: BTreeMap::new(),
            paging: Paging::default(),
            termination: Termination::default(),
            empty_page: EmptyPage::default(),
        }
    }

    /// Appends output fields, keeping their order.
    pub fn out_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.out_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Appends a filter; filters are combined with `AND`.
    pub fn filter(mut self, filter: impl Into<FilterExpression>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Appends several filters in order; combined with `AND` like [`filter`](Self::filter).
    pub fn filters<I, F>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FilterExpression>,
    {
        self.filters.extend(filters.into_iter().map(Into::into));
        self
    }

    /// Designates fields holding epoch-millisecond timestamps.
    pub fn date_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Sets the page size. Must be greater than zero.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Adds an extra query parameter. The protocol parameters `outSR`,
    /// `returnGeometry`, `f`, `outFields` and `where` cannot be overridden.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Chooses how pages advance. Defaults to [`Paging::Resend`].
    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    /// Chooses when the fetch stops. Defaults to [`Termination::BatchMultiple`].
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    /// Chooses how a page without features is treated. Defaults to [`EmptyPage::Error`].
    pub fn with_empty_page(mut self, empty_page: EmptyPage) -> Self {
        self.empty_page = empty_page;
        self
    }

    /// The endpoint URL as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Output fields in request order.
    pub fn fields(&self) -> &[String] {
        &self.out_fields
    }

    /// Fields converted from epoch milliseconds after the fetch.
    pub fn date_field_names(&self) -> &[String] {
        &self.date_fields
    }

    /// Page size; also the divisor of [`Termination::BatchMultiple`].
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The configured paging mode.
    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// The configured termination rule.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// The configured empty-page policy.
    pub fn empty_page(&self) -> EmptyPage {
        self.empty_page
    }

    /// The WHERE clause rendered from the filters.
    pub fn where_clause(&self) -> String {
        where_clause(&self.filters)
    }

    /// The parameter set shared by every page request.
    pub fn assembled_params(&self) -> BTreeMap<String, String> {
        assemble_params(&self.params, &self.out_fields, &self.where_clause())
    }

    /// Parameters of the page starting at `offset`. Only
    /// [`Paging::ResultOffset`] adds anything to `base`.
    pub(crate) fn page_params(
        &self,
        base: &BTreeMap<String, String>,
        offset: usize,
    ) -> BTreeMap<String, String> {
        let mut params = base.clone();
        if self.paging == Paging::ResultOffset {
            params.insert("resultOffset".to_string(), offset.to_string());
            params.insert("resultRecordCount".to_string(), self.batch_size.to_string());
        }
        params
    }

    /// Rejects queries that cannot be sent: zero batch size or empty URL.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::new(ErrorKind::InvalidQuery(
                "batch size must be greater than zero".to_string(),
            )));
        }
        if self.url.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidQuery(
                "endpoint URL is empty".to_string(),
            )));
        }
        Ok(())
    }
}
