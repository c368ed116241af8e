//! CSV output.
//!
//! Header names are fixed and numeric cells never carry unit descriptors.
//! The record writers here are shared with the Markdown renderer, which
//! builds its tables from intermediate CSV.

use super::ensure_records;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::layout::LayoutPlan;
use crate::sections::{GroupPartitioner, RowEvent};
use crate::types::MeasurementRecord;
use log::debug;
use std::io::Write;

/// Render records as CSV.
///
/// A section boundary writes one record with every field blank, followed by
/// the header record again when `section_headers` is set.
pub fn render_csv<W: Write>(records: &[MeasurementRecord], config: &ReportConfig, sink: &mut W) -> Result<()> {
    ensure_records(records)?;
    let plan = LayoutPlan::compute(records, config, false);
    let mut writer = csv::Writer::from_writer(sink);

    writer.write_record(plan.csv_header())?;

    let mut boundaries = 0;
    for event in GroupPartitioner::new(records, config.section_per_group) {
        match event {
            RowEvent::Boundary { .. } => {
                boundaries += 1;
                write_blank_record(&mut writer, &plan, None)?;
                if config.section_headers {
                    writer.write_record(plan.csv_header())?;
                }
            }
            RowEvent::Record(record) => write_measurement(&mut writer, &plan, record)?,
        }
    }
    debug!("CSV report: {} records, {} section boundaries", records.len(), boundaries);

    writer.flush()?;
    Ok(())
}

/// Write one record's participating fields.
pub(super) fn write_measurement<W: Write>(
    writer: &mut csv::Writer<W>,
    plan: &LayoutPlan,
    record: &MeasurementRecord,
) -> Result<()> {
    writer.write_record(plan.plain_cells(record))?;
    Ok(())
}

/// Write a record of blank fields, optionally labeling the first field.
pub(super) fn write_blank_record<W: Write>(
    writer: &mut csv::Writer<W>,
    plan: &LayoutPlan,
    label: Option<&str>,
) -> Result<()> {
    let mut fields = vec![String::new(); plan.columns().len()];
    if let (Some(label), Some(first)) = (label, fields.first_mut()) {
        *first = label.to_string();
    }
    writer.write_record(&fields)?;
    Ok(())
}
