//! Feature records and their field values.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

/// A single attribute value of a feature.
///
/// Values arrive as JSON scalars; fields designated as date fields are
/// converted to [`FieldValue::DateTime`] after the fetch completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Calendar date-time in UTC, without an offset.
    DateTime(NaiveDateTime),
    /// Nested JSON a service returned as an attribute value.
    Json(serde_json::Value),
}

impl FieldValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns the value as `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a date-time if it was normalized.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n
                    .as_f64()
                    .map(FieldValue::Float)
                    .unwrap_or(FieldValue::Json(Value::Number(n))),
            },
            Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Json(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Float(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::DateTime(dt)
    }
}

/// The attribute mapping of one feature.
///
/// # Example
///
/// ```
/// use arcgis_query_feature::Record;
///
/// let mut record = Record::new();
/// record.insert("BE_AKTUELL", 1520i64);
/// record.insert("BE_VORTAG", 1498i64);
///
/// let delta = record.get_i64("BE_AKTUELL").unwrap() - record.get_i64("BE_VORTAG").unwrap();
/// record.insert("BE_AENDERUNG", delta);
///
/// assert_eq!(record.get_i64("BE_AENDERUNG"), Some(22));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns a mutable reference to the value of a field, if present.
    pub fn get_mut(&mut self, field: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field)?.as_str()
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field)?.as_i64()
    }

    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field)?.as_f64()
    }

    pub fn get_datetime(&self, field: &str) -> Option<NaiveDateTime> {
        self.get(field)?.as_datetime()
    }

    /// Sets a field, returning the previous value.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from(v)))
                .collect(),
        }
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
