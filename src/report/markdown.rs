//! Markdown output.
//!
//! Records are serialized to an in-memory CSV buffer with the same field
//! rules as the CSV renderer, then converted to a pipe table by `csv2md`.
//! The header comes from the configured labels and is passed out-of-band.

use super::csv::{write_blank_record, write_measurement};
use super::{ensure_records, system_info_block, write_system_info};
use crate::config::ReportConfig;
use crate::csv2md::{TableSpec, csv_to_markdown};
use crate::error::{ReportError, Result};
use crate::layout::LayoutPlan;
use crate::sections::{GroupPartitioner, RowEvent};
use crate::sysinfo::{HostSystemInfo, SystemInfoProvider};
use crate::types::MeasurementRecord;
use log::debug;
use std::io::Write;

/// Render records as Markdown, probing the host for system information.
pub fn render_markdown<W: Write>(records: &[MeasurementRecord], config: &ReportConfig, sink: &mut W) -> Result<()> {
    render_markdown_with(records, config, &HostSystemInfo, sink)
}

/// Render records as one or more Markdown tables.
///
/// With `section_per_group` a group change either inserts a blank table row
/// or, when `section_headers` is also set, closes the current table and
/// opens a new one. With `group_as_section_name` as well the group column is
/// dropped and group names are written as section titles; without sectioning
/// the group column stays.
pub fn render_markdown_with<W: Write>(
    records: &[MeasurementRecord],
    config: &ReportConfig,
    provider: &dyn SystemInfoProvider,
    sink: &mut W,
) -> Result<()> {
    ensure_records(records)?;
    let system_info = system_info_block(config, provider)?;
    let plan = LayoutPlan::compute(records, config, config.groups_name_sections());
    let spec = TableSpec::new(plan.header_labels(&config.headers), plan.alignments());

    if let Some(block) = system_info {
        write_system_info(sink, &block)?;
    }
    for text in [&config.name, &config.description].into_iter().flatten() {
        writeln!(sink, "{}\n", text)?;
    }

    let partitioner = GroupPartitioner::new(records, config.section_per_group);
    write_section_title(sink, config, partitioner.first_group())?;

    let mut buffer = csv::Writer::from_writer(Vec::new());
    let mut tables = 1;
    for event in partitioner {
        match event {
            RowEvent::Boundary { group } if config.section_headers => {
                flush_table(sink, buffer, &spec)?;
                writeln!(sink)?;
                write_section_title(sink, config, group)?;
                buffer = csv::Writer::from_writer(Vec::new());
                tables += 1;
            }
            RowEvent::Boundary { group } => {
                let label = if config.groups_name_sections() { Some(group) } else { None };
                write_blank_record(&mut buffer, &plan, label)?;
            }
            RowEvent::Record(record) => write_measurement(&mut buffer, &plan, record)?,
        }
    }
    flush_table(sink, buffer, &spec)?;
    debug!("Markdown report: {} records in {} tables", records.len(), tables);

    if let Some(ref note) = config.note {
        writeln!(sink)?;
        writeln!(sink, "{}", note)?;
    }

    Ok(())
}

/// Convert the buffered CSV into a Markdown table and write it out.
fn flush_table<W: Write>(sink: &mut W, buffer: csv::Writer<Vec<u8>>, spec: &TableSpec) -> Result<()> {
    let csv_bytes = buffer.into_inner().map_err(|e| ReportError::Sink(e.into_error()))?;
    debug!("Flushing Markdown table from {} bytes of CSV", csv_bytes.len());
    let table = csv_to_markdown(&csv_bytes, false, spec)?;
    sink.write_all(table.as_bytes())?;
    Ok(())
}

/// Section title line, written only when groups name sections.
fn write_section_title<W: Write>(sink: &mut W, config: &ReportConfig, group: &str) -> Result<()> {
    if !config.groups_name_sections() || group.is_empty() {
        return Ok(());
    }
    writeln!(sink, "{}{}\n", config.section_heading_marker, group)?;
    Ok(())
}
