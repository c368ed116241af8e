//! Fixed-width text output.
//!
//! One header line, one dashed separator, then one line per record. Text
//! columns are left-justified and numeric columns right-justified, each
//! followed by the configured padding.

use super::{ensure_records, system_info_block, write_system_info};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::layout::{Column, LayoutPlan, pad_left, pad_right};
use crate::sections::{GroupPartitioner, RowEvent};
use crate::sysinfo::{HostSystemInfo, SystemInfoProvider};
use crate::types::MeasurementRecord;
use log::debug;
use std::io::Write;

/// Render records as aligned text, probing the host for system information.
pub fn render_text<W: Write>(records: &[MeasurementRecord], config: &ReportConfig, sink: &mut W) -> Result<()> {
    render_text_with(records, config, &HostSystemInfo, sink)
}

/// Render records as aligned text.
///
/// Fails with `EmptyInput` before writing anything when `records` is empty.
pub fn render_text_with<W: Write>(
    records: &[MeasurementRecord],
    config: &ReportConfig,
    provider: &dyn SystemInfoProvider,
    sink: &mut W,
) -> Result<()> {
    ensure_records(records)?;
    let system_info = system_info_block(config, provider)?;
    let plan = LayoutPlan::compute(records, config, false);

    if let Some(block) = system_info {
        write_system_info(sink, &block)?;
    }
    if let Some(ref name) = config.name {
        writeln!(sink, "{}", name)?;
    }
    if let Some(ref description) = config.description {
        writeln!(sink, "{}", description)?;
    }

    write_header(sink, &plan, config)?;

    let mut boundaries = 0;
    for event in GroupPartitioner::new(records, config.section_per_group) {
        match event {
            RowEvent::Boundary { .. } => {
                boundaries += 1;
                writeln!(sink)?;
                if config.section_headers {
                    write_header(sink, &plan, config)?;
                }
            }
            RowEvent::Record(record) => {
                writeln!(sink, "{}", format_record(&plan, record))?;
            }
        }
    }
    debug!("Text report: {} records, {} section boundaries", records.len(), boundaries);

    if let Some(ref note) = config.note {
        writeln!(sink)?;
        writeln!(sink, "{}", note)?;
    }

    Ok(())
}

/// Header line followed by the dashed separator.
fn write_header<W: Write>(sink: &mut W, plan: &LayoutPlan, config: &ReportConfig) -> Result<()> {
    writeln!(sink, "{}", compose_line(plan, &plan.header_labels(&config.headers)))?;
    writeln!(sink, "{}", "-".repeat(plan.total_width()))?;
    Ok(())
}

/// One record as a text line.
pub(crate) fn format_record(plan: &LayoutPlan, record: &MeasurementRecord) -> String {
    let cells: Vec<String> = plan.columns().iter().map(|c| c.column.cell(record, plan.descriptors())).collect();
    compose_line(plan, &cells)
}

/// Lay out one cell per participating column. The note column is last and
/// is written as-is, without padding.
fn compose_line(plan: &LayoutPlan, cells: &[String]) -> String {
    let padding = " ".repeat(plan.padding());
    let mut line = String::new();

    for (spec, cell) in plan.columns().iter().zip(cells) {
        match spec.column {
            Column::Note => line.push_str(cell),
            column if column.is_numeric() => {
                line.push_str(&pad_left(cell, spec.width));
                line.push_str(&padding);
            }
            _ => {
                line.push_str(&pad_right(cell, spec.width));
                line.push_str(&padding);
            }
        }
    }

    line
}
