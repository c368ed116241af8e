//! Group partitioning.
//!
//! Records are already in presentation order; grouping is positional. The
//! partitioner walks the sequence and reports a boundary before each record
//! whose group differs from the previous one. Renderers decide what a
//! boundary looks like in their format.

use crate::types::MeasurementRecord;

/// One step of a partitioned walk over the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent<'a> {
    /// A new section starts with the given group.
    Boundary { group: &'a str },
    Record(&'a MeasurementRecord),
}

/// Iterator over records interleaved with boundary events.
///
/// With sectioning disabled it yields only `RowEvent::Record`.
pub struct GroupPartitioner<'a> {
    records: &'a [MeasurementRecord],
    enabled: bool,
    pos: usize,
    current_group: &'a str,
    pending: Option<&'a MeasurementRecord>,
}

impl<'a> GroupPartitioner<'a> {
    pub fn new(records: &'a [MeasurementRecord], section_per_group: bool) -> Self {
        let current_group = records.first().map_or("", |r| r.group.as_str());
        Self { records, enabled: section_per_group, pos: 0, current_group, pending: None }
    }

    /// Group of the first record, the name of the opening section.
    pub fn first_group(&self) -> &'a str {
        self.records.first().map_or("", |r| r.group.as_str())
    }
}

impl<'a> Iterator for GroupPartitioner<'a> {
    type Item = RowEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(record) = self.pending.take() {
            return Some(RowEvent::Record(record));
        }

        let records = self.records;
        let record = records.get(self.pos)?;
        self.pos += 1;

        if self.enabled && record.group != self.current_group {
            self.current_group = &record.group;
            self.pending = Some(record);
            return Some(RowEvent::Boundary { group: &record.group });
        }

        Some(RowEvent::Record(record))
    }
}

/// Number of boundaries a render of `records` will emit.
pub fn boundary_count(records: &[MeasurementRecord], section_per_group: bool) -> usize {
    GroupPartitioner::new(records, section_per_group)
        .filter(|event| matches!(event, RowEvent::Boundary { .. }))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Measurement;

    fn grouped(groups: &[&str]) -> Vec<MeasurementRecord> {
        groups
            .iter()
            .enumerate()
            .map(|(i, g)| MeasurementRecord::new(format!("b{}", i), Measurement::default()).with_group(*g))
            .collect()
    }

    #[test]
    fn test_empty_has_no_events() {
        let mut partitioner = GroupPartitioner::new(&[], true);
        assert!(partitioner.next().is_none());
        assert_eq!(partitioner.first_group(), "");
    }

    #[test]
    fn test_boundary_precedes_new_group() {
        let records = grouped(&["g1", "g1", "g2"]);
        let events: Vec<RowEvent> = GroupPartitioner::new(&records, true).collect();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], RowEvent::Record(&records[0]));
        assert_eq!(events[1], RowEvent::Record(&records[1]));
        assert_eq!(events[2], RowEvent::Boundary { group: "g2" });
        assert_eq!(events[3], RowEvent::Record(&records[2]));
    }

    #[test]
    fn test_no_boundary_before_first_record() {
        let records = grouped(&["g1", "g2"]);
        let first = GroupPartitioner::new(&records, true).next();
        assert_eq!(first, Some(RowEvent::Record(&records[0])));
    }

    #[test]
    fn test_boundary_count_matches_transitions() {
        let records = grouped(&["a", "a", "b", "a", "", "", "c"]);
        assert_eq!(boundary_count(&records, true), 4);
    }

    #[test]
    fn test_disabled_emits_no_boundaries() {
        let records = grouped(&["a", "b", "c"]);
        assert_eq!(boundary_count(&records, false), 0);
        assert_eq!(GroupPartitioner::new(&records, false).count(), 3);
    }

    #[test]
    fn test_grouping_is_positional() {
        // Returning to an earlier group starts a new section
        let records = grouped(&["x", "y", "x"]);
        let groups: Vec<&str> = GroupPartitioner::new(&records, true)
            .filter_map(|e| match e {
                RowEvent::Boundary { group } => Some(group),
                RowEvent::Record(_) => None,
            })
            .collect();
        assert_eq!(groups, vec!["y", "x"]);
    }
}
