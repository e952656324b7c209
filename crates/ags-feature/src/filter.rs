//! Filter expressions and WHERE-clause rendering.
//!
//! Filters are rendered verbatim: raw clauses are inserted as given and
//! comparison values are single-quoted without escaping. Callers that pass
//! untrusted text must escape it themselves.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;

/// Clause used when no filter is given: select everything.
pub const MATCH_ALL: &str = "1=1";

/// Format of the literal inside `DATE '...'`.
const DATE_LITERAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single filter condition of a feature query.
///
/// # Example
///
/// ```
/// use arcgis_query_feature::{where_clause, FilterExpression};
///
/// let filters = [
///     FilterExpression::raw("NeuerFall IN(1,-1)"),
///     FilterExpression::eq("GEMEINDE", "(gesamter Kreis)"),
/// ];
///
/// assert_eq!(
///     where_clause(&filters),
///     "NeuerFall IN(1,-1) AND GEMEINDE = '(gesamter Kreis)'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// Predicate inserted into the clause as-is.
    Raw(String),
    /// `<field> <comparator> <value>`.
    Compare {
        field: String,
        comparator: String,
        value: FilterValue,
    },
}

impl FilterExpression {
    /// Creates a raw predicate.
    pub fn raw(predicate: impl Into<String>) -> Self {
        FilterExpression::Raw(predicate.into())
    }

    /// Creates a comparison with an arbitrary comparator (`=`, `<>`, `LIKE`, ...).
    pub fn compare(
        field: impl Into<String>,
        comparator: impl Into<String>,
        value: impl Into<FilterValue>,
    ) -> Self {
        FilterExpression::Compare {
            field: field.into(),
            comparator: comparator.into(),
            value: value.into(),
        }
    }

    /// Creates an equality filter: `field = value`.
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, "=", value)
    }

    /// Creates a not-equal filter: `field <> value`.
    pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, "<>", value)
    }

    /// Creates a greater-than filter: `field > value`.
    pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, ">", value)
    }

    /// Creates a greater-than-or-equal filter: `field >= value`.
    pub fn ge(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, ">=", value)
    }

    /// Creates a less-than filter: `field < value`.
    pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, "<", value)
    }

    /// Creates a less-than-or-equal filter: `field <= value`.
    pub fn le(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::compare(field, "<=", value)
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Raw(predicate) => f.write_str(predicate),
            FilterExpression::Compare {
                field,
                comparator,
                value,
            } => write!(f, "{} {} {}", field, comparator, value),
        }
    }
}

impl From<&str> for FilterExpression {
    fn from(predicate: &str) -> Self {
        FilterExpression::raw(predicate)
    }
}

impl From<String> for FilterExpression {
    fn from(predicate: String) -> Self {
        FilterExpression::Raw(predicate)
    }
}

impl<F, C, V> From<(F, C, V)> for FilterExpression
where
    F: Into<String>,
    C: Into<String>,
    V: Into<FilterValue>,
{
    fn from((field, comparator, value): (F, C, V)) -> Self {
        FilterExpression::compare(field, comparator, value)
    }
}

/// Right-hand side of a comparison filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Calendar date, rendered at midnight.
    Date(NaiveDate),
    /// Calendar date-time.
    DateTime(NaiveDateTime),
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Date(date) => {
                let midnight = date.and_time(NaiveTime::default());
                write!(f, "DATE '{}'", midnight.format(DATE_LITERAL_FORMAT))
            }
            FilterValue::DateTime(dt) => write!(f, "DATE '{}'", dt.format(DATE_LITERAL_FORMAT)),
            FilterValue::Text(text) => write!(f, "'{}'", text),
            FilterValue::Number(number) => write!(f, "'{}'", number),
        }
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(date: NaiveDate) -> Self {
        FilterValue::Date(date)
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(dt: NaiveDateTime) -> Self {
        FilterValue::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FilterValue::DateTime(dt.naive_utc())
    }
}

impl From<&str> for FilterValue {
    fn from(text: &str) -> Self {
        FilterValue::Text(text.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(text: String) -> Self {
        FilterValue::Text(text)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n.into())
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Number(n.into())
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        // NaN and infinities have no JSON number form; quote their text instead.
        serde_json::Number::from_f64(n)
            .map(FilterValue::Number)
            .unwrap_or_else(|| FilterValue::Text(n.to_string()))
    }
}

/// Render filters into a single WHERE clause.
///
/// No filters yield [`MATCH_ALL`]; otherwise the rendered filters are joined
/// with `" AND "` in input order.
pub fn where_clause(filters: &[FilterExpression]) -> String {
    if filters.is_empty() {
        return MATCH_ALL.to_string();
    }

    filters
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" AND ")
}
