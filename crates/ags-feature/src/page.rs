//! Wire types of a single query page and the pagination options.

use serde::Deserialize;

/// One page of a FeatureServer query response.
///
/// A body without a `features` key decodes as an empty page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePage {
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Set by the service when more records match than it returned.
    #[serde(default)]
    pub exceeded_transfer_limit: bool,
}

impl FeaturePage {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// A returned feature. Geometry is never requested, so only attributes are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// How successive page requests advance through the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Paging {
    /// Resend the identical parameter set and rely on the service to advance.
    #[default]
    Resend,
    /// Send `resultOffset` (features received so far) and
    /// `resultRecordCount` (the batch size) with every page. Only for layers
    /// that advertise `supportsPagination`; replaces caller-supplied values
    /// of either parameter.
    ResultOffset,
}

/// When the fetch stops requesting pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Termination {
    /// Continue while the number of features received so far is an exact
    /// multiple of the batch size.
    #[default]
    BatchMultiple,
    /// Continue while the service sets `exceededTransferLimit`.
    TransferLimit,
}

impl Termination {
    /// Whether another page should be requested after `page` brought the
    /// running total to `total`.
    pub fn should_continue(self, total: usize, batch_size: usize, page: &FeaturePage) -> bool {
        match self {
            Termination::BatchMultiple => total % batch_size == 0,
            Termination::TransferLimit => page.exceeded_transfer_limit,
        }
    }
}

/// How a page without features is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPage {
    /// Any empty page fails the fetch with an empty-result error.
    #[default]
    Error,
    /// An empty page after at least one non-empty page ends the fetch.
    /// An empty first page is still an error.
    EndOfData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json: serde_json::Value) -> FeaturePage {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_page_deserialization() {
        let page = page(serde_json::json!({
            "objectIdFieldName": "OBJECTID",
            "fields": [{"name": "AnzahlFall", "type": "esriFieldTypeInteger"}],
            "features": [
                {"attributes": {"AnzahlFall": 12}},
                {"attributes": {"AnzahlFall": 3}, "geometry": null}
            ],
            "exceededTransferLimit": true
        }));

        assert_eq!(page.len(), 2);
        assert!(page.exceeded_transfer_limit);
        assert_eq!(page.features[0].attributes["AnzahlFall"], 12);
    }

    #[test]
    fn test_missing_features_is_empty_page() {
        let page = page(serde_json::json!({"objectIdFieldName": "OBJECTID"}));
        assert!(page.is_empty());
        assert!(!page.exceeded_transfer_limit);
    }

    #[test]
    fn test_batch_multiple_continuation() {
        let full = FeaturePage::default();
        assert!(Termination::BatchMultiple.should_continue(5000, 5000, &full));
        assert!(Termination::BatchMultiple.should_continue(10000, 5000, &full));
        assert!(!Termination::BatchMultiple.should_continue(13000, 5000, &full));
        assert!(!Termination::BatchMultiple.should_continue(1, 5000, &full));
    }

    #[test]
    fn test_transfer_limit_continuation() {
        let more = FeaturePage {
            features: Vec::new(),
            exceeded_transfer_limit: true,
        };
        assert!(Termination::TransferLimit.should_continue(1234, 5000, &more));
        assert!(!Termination::TransferLimit.should_continue(5000, 5000, &FeaturePage::default()));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Paging::default(), Paging::Resend);
        assert_eq!(Termination::default(), Termination::BatchMultiple);
        assert_eq!(EmptyPage::default(), EmptyPage::Error);
    }
}
