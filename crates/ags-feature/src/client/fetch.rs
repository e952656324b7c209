use std::collections::BTreeMap;

use arcgis_query_client::sanitize_url;
use tracing::{debug, info, instrument, warn};

use crate::dates::normalize_date_fields;
use crate::error::{Error, ErrorKind, Result};
use crate::page::{EmptyPage, Feature, FeaturePage};
use crate::query::FeatureQuery;
use crate::record::Record;
use crate::result::ResultSet;

impl super::FeatureServiceClient {
    /// Fetch the complete result of a query.
    ///
    /// Pages are requested one after another until the query's
    /// [`Termination`](crate::Termination) rule stops. Designated date fields
    /// are then converted and a single-feature result is collapsed into
    /// [`ResultSet::Single`].
    ///
    /// Any failing page aborts the fetch; features of earlier pages are
    /// discarded.
    #[instrument(skip(self, query), fields(url = %sanitize_url(query.url())))]
    pub async fn fetch(&self, query: &FeatureQuery) -> Result<ResultSet> {
        let features = self.fetch_features(query).await?;

        let mut records: Vec<Record> = features
            .into_iter()
            .map(|feature| Record::from(feature.attributes))
            .collect();
        normalize_date_fields(&mut records, query.date_field_names())?;

        let result = ResultSet::simplify(records);
        info!(
            records = result.len(),
            single = result.is_single(),
            "Fetch complete"
        );
        Ok(result)
    }

    /// Fetch every page of a query and return the raw features in order.
    #[instrument(skip(self, query), fields(url = %sanitize_url(query.url())))]
    pub async fn fetch_features(&self, query: &FeatureQuery) -> Result<Vec<Feature>> {
        query.validate()?;

        let base = query.assembled_params();
        let batch_size = query.batch_size();
        let mut features: Vec<Feature> = Vec::new();
        let mut pages = 0usize;

        loop {
            let params = query.page_params(&base, features.len());
            let (page, url) = self.fetch_page(query.url(), &params).await?;
            pages += 1;

            debug!(
                page = pages,
                page_size = page.len(),
                total = features.len() + page.len(),
                exceeded_transfer_limit = page.exceeded_transfer_limit,
                "Page received"
            );

            if page.is_empty() {
                if query.empty_page() == EmptyPage::EndOfData && !features.is_empty() {
                    debug!(page = pages, "Empty page ends the fetch");
                    break;
                }
                return Err(Error::new(ErrorKind::EmptyResult { url }));
            }

            let total = features.len() + page.len();
            let more = query.termination().should_continue(total, batch_size, &page);
            if !more && page.exceeded_transfer_limit {
                warn!(
                    total,
                    batch_size,
                    "Service reports more records, but the page ended the fetch"
                );
            }

            features.extend(page.features);
            if !more {
                break;
            }
        }

        info!(features = features.len(), pages, "All pages fetched");
        Ok(features)
    }

    /// Issue one page request; returns the page and its redacted request URL.
    async fn fetch_page(
        &self,
        url: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<(FeaturePage, String)> {
        let request = self.http.get(url).query_pairs(params);
        let response = self.http.execute(&request).await?;
        let request_url = sanitize_url(response.url());
        let page: FeaturePage = response.service_json().await?;
        Ok((page, request_url))
    }
}
