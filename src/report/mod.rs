//! Report rendering - one record set, three output formats.
//!
//! This module handles:
//! - Dispatching a render to the text, CSV, or Markdown backend
//! - Guards shared by every backend (empty input, system information prefix)
//! - The `Report` holder pairing a record set with its configuration
//!
//! Column sizing lives in `layout`, section boundaries in `sections`.
//!
//! # Module Organization
//!
//! - `text` - Fixed-width aligned text
//! - `csv` - CSV records
//! - `markdown` - Markdown pipe tables built from intermediate CSV

mod csv;
mod markdown;
mod text;

pub use self::csv::render_csv;
pub use markdown::{render_markdown, render_markdown_with};
pub use text::{render_text, render_text_with};

use crate::config::{ReportConfig, SystemInfoLevel};
use crate::error::{ReportError, Result};
use crate::sysinfo::{HostSystemInfo, SystemInfoProvider};
use crate::types::{MeasurementRecord, RecordSet};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format of a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Render `records` in `format` using the host system information probe.
pub fn render<W: Write>(
    format: OutputFormat,
    records: &[MeasurementRecord],
    config: &ReportConfig,
    sink: &mut W,
) -> Result<()> {
    render_with(format, records, config, &HostSystemInfo, sink)
}

/// Render `records` in `format` with an explicit system information source.
pub fn render_with<W: Write>(
    format: OutputFormat,
    records: &[MeasurementRecord],
    config: &ReportConfig,
    provider: &dyn SystemInfoProvider,
    sink: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => render_text_with(records, config, provider, sink),
        OutputFormat::Csv => render_csv(records, config, sink),
        OutputFormat::Markdown => render_markdown_with(records, config, provider, sink),
    }
}

/// A record set together with the configuration and format it renders with.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub format: OutputFormat,
    pub config: ReportConfig,
    records: RecordSet,
}

impl Report {
    pub fn new(format: OutputFormat) -> Self {
        Self { format, config: ReportConfig::default(), records: RecordSet::new() }
    }

    pub fn with_config(format: OutputFormat, config: ReportConfig) -> Self {
        Self { format, config, records: RecordSet::new() }
    }

    /// Append a record to the report.
    pub fn add(&mut self, record: MeasurementRecord) {
        self.records.add(record);
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Render the report to `sink`.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        render(self.format, self.records.as_slice(), &self.config, sink)
    }
}

impl Extend<MeasurementRecord> for Report {
    fn extend<T: IntoIterator<Item = MeasurementRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

/// Every renderer refuses an empty record set before touching the sink.
fn ensure_records(records: &[MeasurementRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(ReportError::EmptyInput);
    }
    Ok(())
}

/// Fetch the system information block the configuration asks for.
fn system_info_block(config: &ReportConfig, provider: &dyn SystemInfoProvider) -> Result<Option<String>> {
    let block = match config.system_info_level() {
        SystemInfoLevel::None => return Ok(None),
        SystemInfoLevel::Basic => provider.basic()?,
        SystemInfoLevel::Detailed => provider.detailed()?,
    };
    Ok(Some(block))
}

/// Write the system information block followed by a blank line.
fn write_system_info<W: Write>(sink: &mut W, block: &str) -> Result<()> {
    sink.write_all(block.as_bytes())?;
    if !block.ends_with('\n') {
        writeln!(sink)?;
    }
    writeln!(sink)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Measurement;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("html".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }

    #[test]
    fn test_report_write_to_dispatches() {
        let mut report = Report::new(OutputFormat::Csv);
        report.add(MeasurementRecord::new("a", Measurement::new(1, 2, 3, 4)));
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Name,Operations,Ns/Op,Bytes/Op,Allocs/Op\na,1,2,3,4\n");
    }

    #[test]
    fn test_report_empty_fails() {
        let report = Report::new(OutputFormat::Markdown);
        let mut out = Vec::new();
        assert!(matches!(report.write_to(&mut out), Err(ReportError::EmptyInput)));
        assert!(out.is_empty());
    }
}
