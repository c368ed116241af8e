//! Benchmark report rendering.
//!
//! Collect labeled benchmark measurements, then render them as aligned
//! text, CSV, or Markdown tables:
//!
//! ```
//! use bench_report::{Measurement, MeasurementRecord, ReportConfig, render_text};
//!
//! let records = vec![
//!     MeasurementRecord::new("encode", Measurement::new(1000, 512, 64, 2)),
//!     MeasurementRecord::new("decode", Measurement::new(2000, 256, 0, 0)),
//! ];
//! let mut out = Vec::new();
//! render_text(&records, &ReportConfig::default(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("encode"));
//! ```
//!
//! # Module Organization
//!
//! - `types` - Measurement records and the ordered record set
//! - `config` - Report configuration
//! - `layout` - Column order, widths, and cell formatting
//! - `sections` - Group boundary detection
//! - `report` - Text, CSV, and Markdown renderers
//! - `csv2md` - CSV to Markdown table conversion
//! - `sysinfo` - Host system description
//! - `util` - Random input helpers and a progress indicator

pub mod config;
pub mod csv2md;
pub mod error;
pub mod layout;
pub mod report;
pub mod sections;
pub mod sysinfo;
pub mod types;
pub mod util;

pub use config::{ColumnHeaders, ReportConfig, SystemInfoLevel};
pub use error::{ReportError, Result};
pub use layout::{Column, LayoutPlan};
pub use report::{
    OutputFormat, Report, render, render_csv, render_markdown, render_markdown_with, render_text, render_text_with,
    render_with,
};
pub use sections::{GroupPartitioner, RowEvent};
pub use sysinfo::{HostSystemInfo, SystemInfoProvider};
pub use types::{Measurement, MeasurementRecord, RecordSet};
