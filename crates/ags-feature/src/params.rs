//! Query parameter assembly.

use std::collections::BTreeMap;

use serde::Serialize;

/// Output spatial reference sent with every query (WGS84).
pub const OUT_SPATIAL_REFERENCE: u32 = 4326;

/// A caller-supplied extra query parameter.
///
/// Composite values are sent as compact JSON text, which is how ArcGIS
/// expects structured parameters such as `outStatistics` or `orderByFields`
/// lists.
///
/// # Example
///
/// ```
/// use arcgis_query_feature::ParamValue;
///
/// let stats = ParamValue::from(serde_json::json!([{
///     "statisticType": "sum",
///     "onStatisticField": "AnzahlFall",
///     "outStatisticFieldName": "AnzahlFall",
/// }]));
///
/// assert_eq!(
///     stats.to_transport(),
///     r#"[{"onStatisticField":"AnzahlFall","outStatisticFieldName":"AnzahlFall","statisticType":"sum"}]"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(Scalar),
    Sequence(Vec<ParamValue>),
    Mapping(BTreeMap<String, ParamValue>),
}

/// Scalar parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// The string form handed to the transport layer.
    pub fn to_transport(&self) -> String {
        match self {
            ParamValue::Scalar(Scalar::Text(text)) => text.clone(),
            ParamValue::Scalar(Scalar::Integer(n)) => n.to_string(),
            ParamValue::Scalar(Scalar::Float(n)) => n.to_string(),
            ParamValue::Scalar(Scalar::Bool(b)) => b.to_string(),
            composite => serialize_composite(composite),
        }
    }
}

fn serialize_composite(value: &ParamValue) -> String {
    // Serializing plain strings, numbers and maps with string keys cannot fail;
    // non-finite floats become `null`.
    serde_json::to_string(value).unwrap_or_default()
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        ParamValue::Scalar(Scalar::Text(text.to_string()))
    }
}

impl From<String> for ParamValue {
    fn from(text: String) -> Self {
        ParamValue::Scalar(Scalar::Text(text))
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Scalar(Scalar::Integer(n))
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Scalar(Scalar::Integer(n.into()))
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        ParamValue::Scalar(Scalar::Integer(n.into()))
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Scalar(Scalar::Float(n))
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Scalar(Scalar::Bool(b))
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ParamValue::Scalar(Scalar::Text("null".to_string())),
            Value::Bool(b) => b.into(),
            Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                None => n.as_f64().unwrap_or_default().into(),
            },
            Value::String(s) => s.into(),
            Value::Array(items) => {
                ParamValue::Sequence(items.into_iter().map(ParamValue::from).collect())
            }
            Value::Object(map) => ParamValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, ParamValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Build the final parameter set of a query.
///
/// Extra parameters are converted to their transport form first; the fixed
/// protocol parameters are then set on top and win over caller-supplied
/// values of the same name.
pub fn assemble_params(
    extra: &BTreeMap<String, ParamValue>,
    out_fields: &[String],
    where_clause: &str,
) -> BTreeMap<String, String> {
    let mut params: BTreeMap<String, String> = extra
        .iter()
        .map(|(name, value)| (name.clone(), value.to_transport()))
        .collect();

    params.insert("outSR".to_string(), OUT_SPATIAL_REFERENCE.to_string());
    params.insert("returnGeometry".to_string(), "false".to_string());
    params.insert("f".to_string(), "json".to_string());
    params.insert("outFields".to_string(), out_fields.join(","));
    params.insert("where".to_string(), where_clause.to_string());

    params
}
