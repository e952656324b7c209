//! Result shape returned to callers.

use serde::Serialize;

use crate::record::Record;

/// The records of a completed fetch.
///
/// A fetch that produced exactly one feature yields [`ResultSet::Single`]
/// with that feature's attributes, which is the natural shape for aggregate
/// queries such as `outStatistics` sums. Every other fetch yields
/// [`ResultSet::Many`]. Which shape a given query produces is only known at
/// runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultSet {
    Single(Record),
    Many(Vec<Record>),
}

impl ResultSet {
    /// Collapse a one-element sequence into its only record.
    pub fn simplify(mut records: Vec<Record>) -> Self {
        if records.len() == 1 {
            if let Some(record) = records.pop() {
                return ResultSet::Single(record);
            }
        }
        ResultSet::Many(records)
    }

    pub fn is_single(&self) -> bool {
        matches!(self, ResultSet::Single(_))
    }

    /// Number of records, counting a single record as one.
    pub fn len(&self) -> usize {
        match self {
            ResultSet::Single(_) => 1,
            ResultSet::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The record of a single-feature result.
    pub fn single(&self) -> Option<&Record> {
        match self {
            ResultSet::Single(record) => Some(record),
            ResultSet::Many(_) => None,
        }
    }

    /// All records regardless of shape.
    pub fn records(&self) -> &[Record] {
        match self {
            ResultSet::Single(record) => std::slice::from_ref(record),
            ResultSet::Many(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            ResultSet::Single(record) => vec![record],
            ResultSet::Many(records) => records,
        }
    }
}
