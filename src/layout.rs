/// Column layout for rendered reports
///
/// This module handles:
/// - The fixed column order shared by every output format
/// - Per-column width calculation from the data and the active configuration
/// - Cell value formatting (operation totals, per-op figures, unit descriptors)
/// - Display-width aware padding
///
/// A `LayoutPlan` is computed once per render and passed by reference to
/// every formatting step.

use crate::config::{ColumnHeaders, ReportConfig};
use crate::csv2md::Alignment;
use crate::types::MeasurementRecord;
use log::debug;
use unicode_width::UnicodeWidthStr;

/// A report column, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Group,
    SubGroup,
    Name,
    Description,
    Operations,
    NanosPerOp,
    BytesPerOp,
    AllocsPerOp,
    Note,
}

impl Column {
    /// Every column in output order.
    pub const ALL: [Column; 9] = [
        Column::Group,
        Column::SubGroup,
        Column::Name,
        Column::Description,
        Column::Operations,
        Column::NanosPerOp,
        Column::BytesPerOp,
        Column::AllocsPerOp,
        Column::Note,
    ];

    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Operations | Column::NanosPerOp | Column::BytesPerOp | Column::AllocsPerOp)
    }

    /// Header used in CSV output, independent of configured header text.
    pub fn csv_header(self) -> &'static str {
        match self {
            Column::Group => "Group",
            Column::SubGroup => "SubGroup",
            Column::Name => "Name",
            Column::Description => "Description",
            Column::Operations => "Operations",
            Column::NanosPerOp => "Ns/Op",
            Column::BytesPerOp => "Bytes/Op",
            Column::AllocsPerOp => "Allocs/Op",
            Column::Note => "Note",
        }
    }

    /// Configured header text for this column.
    pub fn header(self, headers: &ColumnHeaders) -> &str {
        match self {
            Column::Group => &headers.group,
            Column::SubGroup => &headers.subgroup,
            Column::Name => &headers.name,
            Column::Description => &headers.description,
            Column::Operations => &headers.operations,
            Column::NanosPerOp => &headers.nanos_per_op,
            Column::BytesPerOp => &headers.bytes_per_op,
            Column::AllocsPerOp => &headers.allocs_per_op,
            Column::Note => &headers.note,
        }
    }

    /// Unit text appended to numeric cells when descriptors are enabled.
    pub fn descriptor(self) -> &'static str {
        match self {
            Column::Operations => " ops",
            Column::NanosPerOp => " ns/op",
            Column::BytesPerOp => " bytes/op",
            Column::AllocsPerOp => " allocs/op",
            _ => "",
        }
    }

    /// Width added for descriptors. The operations suffix is not counted;
    /// the operations header is normally wide enough to absorb it.
    fn descriptor_width(self) -> usize {
        match self {
            Column::NanosPerOp => 6,
            Column::BytesPerOp => 9,
            Column::AllocsPerOp => 10,
            _ => 0,
        }
    }

    /// Text columns are left aligned, numeric columns right aligned.
    pub fn alignment(self) -> Alignment {
        if self.is_numeric() { Alignment::Right } else { Alignment::Left }
    }

    /// Raw text of a textual column; empty for numeric columns.
    fn text<'a>(self, record: &'a MeasurementRecord) -> &'a str {
        match self {
            Column::Group => &record.group,
            Column::SubGroup => &record.subgroup,
            Column::Name => &record.name,
            Column::Description => &record.description,
            Column::Note => &record.note,
            _ => "",
        }
    }

    /// Displayed number of a numeric column.
    fn number(self, record: &MeasurementRecord) -> i64 {
        match self {
            Column::Operations => record.total_operations(),
            Column::NanosPerOp => record.per_op(record.result.nanos_per_op),
            Column::BytesPerOp => record.per_op(record.result.bytes_per_op),
            Column::AllocsPerOp => record.per_op(record.result.allocs_per_op),
            _ => 0,
        }
    }

    /// Format this column's cell for a record.
    ///
    /// Numeric cells carry a unit suffix only when `descriptors` is set.
    pub fn cell(self, record: &MeasurementRecord, descriptors: bool) -> String {
        if !self.is_numeric() {
            return self.text(record).to_string();
        }
        let value = self.number(record);
        if descriptors { format!("{}{}", value, self.descriptor()) } else { value.to_string() }
    }
}

/// One participating column and its computed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: Column,
    pub width: usize,
}

/// Resolved columns and widths for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    columns: Vec<ColumnSpec>,
    padding: usize,
    descriptors: bool,
}

impl LayoutPlan {
    /// Size every column from the records and configuration.
    ///
    /// Textual columns that are empty for every record are dropped; numeric
    /// columns are always present. `omit_group` drops the group column
    /// regardless of its content.
    pub fn compute(records: &[MeasurementRecord], config: &ReportConfig, omit_group: bool) -> Self {
        let descriptors = config.include_ops_column_descriptors;
        let mut columns = Vec::with_capacity(Column::ALL.len());

        for column in Column::ALL {
            if column == Column::Group && omit_group {
                continue;
            }

            let data_width = if column.is_numeric() {
                let widest =
                    records.iter().map(|r| column.number(r).to_string().len()).max().unwrap_or(0);
                if descriptors { widest + column.descriptor_width() } else { widest }
            } else {
                let widest = records.iter().map(|r| display_width(column.text(r))).max().unwrap_or(0);
                if widest == 0 {
                    continue;
                }
                widest
            };

            let width = data_width.max(display_width(column.header(&config.headers)));
            columns.push(ColumnSpec { column, width });
        }

        let plan = LayoutPlan { columns, padding: config.column_padding, descriptors };
        debug!("Layout plan: {:?}", plan);
        plan
    }

    /// Participating columns in output order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn descriptors(&self) -> bool {
        self.descriptors
    }

    pub fn participates(&self, column: Column) -> bool {
        self.columns.iter().any(|c| c.column == column)
    }

    /// Computed width of a column, zero when it does not participate.
    pub fn width(&self, column: Column) -> usize {
        self.columns.iter().find(|c| c.column == column).map_or(0, |c| c.width)
    }

    /// Sum of every participating column's width plus padding.
    pub fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.width + self.padding).sum()
    }

    /// Configured header labels of the participating columns.
    pub fn header_labels(&self, headers: &ColumnHeaders) -> Vec<String> {
        self.columns.iter().map(|c| c.column.header(headers).to_string()).collect()
    }

    /// Fixed CSV header names of the participating columns.
    pub fn csv_header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.column.csv_header()).collect()
    }

    pub fn alignments(&self) -> Vec<Alignment> {
        self.columns.iter().map(|c| c.column.alignment()).collect()
    }

    /// Plain (descriptor-free) cells of a record for the participating columns.
    pub fn plain_cells(&self, record: &MeasurementRecord) -> Vec<String> {
        self.columns.iter().map(|c| c.column.cell(record, false)).collect()
    }
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-justify `s` in a field of `width` display columns. Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

/// Right-justify `s` in a field of `width` display columns. Never truncates.
pub fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(padding), s)
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
