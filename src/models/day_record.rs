use super::field::{self, FieldSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Readings captured for one calendar date: field name → value.
///
/// A missing key means "not entered yet", never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayRecord(BTreeMap<String, u32>);

impl DayRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &FieldSpec) -> Option<u32> {
        self.0.get(field.name).copied()
    }

    pub fn set(&mut self, field: &FieldSpec, value: u32) {
        self.0.insert(field.name.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Stored entries ordered by the field schema; keys that are not part
    /// of the schema (hand-edited files) come last, alphabetically.
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut out: Vec<(&str, u32)> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        out.sort_by_key(|(k, _)| field::schema_index(k));
        out
    }
}

impl FromIterator<(&'static FieldSpec, u32)> for DayRecord {
    fn from_iter<I: IntoIterator<Item = (&'static FieldSpec, u32)>>(iter: I) -> Self {
        let mut record = DayRecord::new();
        for (f, v) in iter {
            record.set(f, v);
        }
        record
    }
}
