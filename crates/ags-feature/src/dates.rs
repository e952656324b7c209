//! Conversion of epoch-millisecond date fields.

use chrono::{DateTime, NaiveDateTime};

use crate::error::{Error, ErrorKind, Result};
use crate::record::{FieldValue, Record};

/// Convert an epoch-millisecond timestamp (UTC) to a calendar date-time.
pub fn from_epoch_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Rewrite every designated date field of every record in place.
///
/// Absent fields and nulls are left alone. A designated field holding
/// anything other than a number fails the whole call.
pub fn normalize_date_fields(records: &mut [Record], date_fields: &[String]) -> Result<()> {
    if date_fields.is_empty() {
        return Ok(());
    }

    for record in records.iter_mut() {
        for field in date_fields {
            let Some(value) = record.get_mut(field) else {
                continue;
            };

            let converted = match &*value {
                FieldValue::Null | FieldValue::DateTime(_) => continue,
                FieldValue::Integer(ms) => from_epoch_millis(*ms),
                // Fractional milliseconds keep microsecond precision.
                FieldValue::Float(ms) => {
                    DateTime::from_timestamp_micros((*ms * 1000.0).round() as i64)
                        .map(|dt| dt.naive_utc())
                }
                other => return Err(date_field_error(field, other)),
            };

            match converted {
                Some(dt) => *value = FieldValue::DateTime(dt),
                None => return Err(date_field_error(field, value)),
            }
        }
    }

    Ok(())
}

fn date_field_error(field: &str, value: &FieldValue) -> Error {
    let value = serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value));
    Error::new(ErrorKind::DateField {
        field: field.to_string(),
        value,
    })
}
