use serde::Serialize;

use super::EmployeeRecord;

/// The records returned by one upstream list call, in upstream order.
///
/// A snapshot is never cached or shared between operations; each
/// aggregation fetches its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CollectionSnapshot {
    records: Vec<EmployeeRecord>,
}

impl CollectionSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EmployeeRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<EmployeeRecord>> for CollectionSnapshot {
    fn from(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<EmployeeRecord> for CollectionSnapshot {
    fn from_iter<I: IntoIterator<Item = EmployeeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
