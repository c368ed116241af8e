//! Core data structures for benchmark measurements.
//!
//! A `MeasurementRecord` is one labeled benchmark result; a `RecordSet` is the
//! ordered collection handed to the renderers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Normalized result of one benchmark run.
///
/// All four figures are independent; none is derived from another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Number of operations performed
    pub operations: i64,
    /// Nanoseconds per operation
    pub nanos_per_op: i64,
    /// Bytes allocated per operation
    pub bytes_per_op: i64,
    /// Allocations per operation
    pub allocs_per_op: i64,
}

impl Measurement {
    pub fn new(operations: i64, nanos_per_op: i64, bytes_per_op: i64, allocs_per_op: i64) -> Self {
        Self { operations, nanos_per_op, bytes_per_op, allocs_per_op }
    }

    /// Build a measurement from the raw totals a benchmark harness reports.
    ///
    /// Per-op figures use integer division. A run with zero operations yields
    /// zero per-op figures rather than dividing by zero.
    pub fn from_totals(n: u64, elapsed: Duration, mem_bytes: u64, mem_allocs: u64) -> Self {
        let operations = i64::try_from(n).unwrap_or(i64::MAX);
        if operations == 0 {
            return Self::default();
        }
        let nanos = i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX);
        let bytes = i64::try_from(mem_bytes).unwrap_or(i64::MAX);
        let allocs = i64::try_from(mem_allocs).unwrap_or(i64::MAX);
        Self {
            operations,
            nanos_per_op: nanos / operations,
            bytes_per_op: bytes / operations,
            allocs_per_op: allocs / operations,
        }
    }
}

fn default_iterations() -> i64 {
    1
}

/// One benchmark and its result, plus optional grouping metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Section label; empty means ungrouped
    #[serde(default)]
    pub group: String,
    /// Secondary label, shown as its own column only
    #[serde(default)]
    pub subgroup: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub note: String,
    /// How many times the measured body ran per operation
    #[serde(default = "default_iterations")]
    pub iterations: i64,
    pub result: Measurement,
}

impl Default for MeasurementRecord {
    fn default() -> Self {
        Self {
            group: String::new(),
            subgroup: String::new(),
            name: String::new(),
            description: String::new(),
            note: String::new(),
            iterations: default_iterations(),
            result: Measurement::default(),
        }
    }
}

impl MeasurementRecord {
    /// Create an ungrouped record with a name and result.
    pub fn new(name: impl Into<String>, result: Measurement) -> Self {
        Self { name: name.into(), result, ..Self::default() }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_subgroup(mut self, subgroup: impl Into<String>) -> Self {
        self.subgroup = subgroup.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_iterations(mut self, iterations: i64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Iteration divisor, never less than 1.
    pub fn effective_iterations(&self) -> i64 {
        self.iterations.max(1)
    }

    /// Total operations shown in the report: `operations * iterations`.
    pub fn total_operations(&self) -> i64 {
        self.result.operations.saturating_mul(self.effective_iterations())
    }

    /// Per-op figure for display: zero stays zero, anything else is divided
    /// by the iteration count.
    pub fn per_op(&self, value: i64) -> i64 {
        if value == 0 { 0 } else { value / self.effective_iterations() }
    }
}

/// Ordered, append-only collection of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<MeasurementRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Append a record; insertion order is the presentation order.
    pub fn add(&mut self, record: MeasurementRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeasurementRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[MeasurementRecord] {
        &self.records
    }
}

impl Extend<MeasurementRecord> for RecordSet {
    fn extend<T: IntoIterator<Item = MeasurementRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<MeasurementRecord> for RecordSet {
    fn from_iter<T: IntoIterator<Item = MeasurementRecord>>(iter: T) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a MeasurementRecord;
    type IntoIter = std::slice::Iter<'a, MeasurementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_operations_multiplies_iterations() {
        let record = MeasurementRecord::new("a", Measurement::new(1000, 1, 1, 1)).with_iterations(4);
        assert_eq!(record.total_operations(), 4000);
    }

    #[test]
    fn test_per_op_zero_stays_zero() {
        let record = MeasurementRecord::new("a", Measurement::new(10, 0, 0, 0)).with_iterations(7);
        assert_eq!(record.per_op(record.result.bytes_per_op), 0);
    }

    #[test]
    fn test_per_op_divides_by_iterations() {
        let record = MeasurementRecord::new("a", Measurement::new(10, 800, 0, 0)).with_iterations(4);
        assert_eq!(record.per_op(record.result.nanos_per_op), 200);
    }

    #[test]
    fn test_zero_iterations_treated_as_one() {
        let record = MeasurementRecord::new("a", Measurement::new(5, 50, 0, 0)).with_iterations(0);
        assert_eq!(record.total_operations(), 5);
        assert_eq!(record.per_op(50), 50);
    }

    #[test]
    fn test_from_totals() {
        let m = Measurement::from_totals(100, Duration::from_micros(50), 3200, 200);
        assert_eq!(m, Measurement::new(100, 500, 32, 2));
    }

    #[test]
    fn test_from_totals_zero_ops() {
        let m = Measurement::from_totals(0, Duration::from_secs(1), 10, 10);
        assert_eq!(m, Measurement::default());
    }

    #[test]
    fn test_record_set_preserves_order() {
        let mut set = RecordSet::new();
        set.add(MeasurementRecord::new("b", Measurement::default()));
        set.add(MeasurementRecord::new("a", Measurement::default()));
        set.add(MeasurementRecord::new("b", Measurement::default()));
        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_record_deserialize_defaults() {
        let json = r#"{"name":"x","result":{"operations":1,"nanos_per_op":2,"bytes_per_op":3,"allocs_per_op":4}}"#;
        let record: MeasurementRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.iterations, 1);
        assert!(record.group.is_empty());
        assert_eq!(record.result.allocs_per_op, 4);
    }
}
