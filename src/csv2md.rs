//! CSV to Markdown table conversion.
//!
//! Takes CSV bytes, an optional out-of-band header, and per-column alignment,
//! and produces a GitHub-flavored Markdown pipe table. Column cells are padded
//! so the raw Markdown reads as an aligned table too.

use crate::layout::{display_width, pad_left, pad_right};
use std::str::FromStr;
use thiserror::Error;

/// Column alignment in a Markdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Right => "r",
            Alignment::Center => "c",
        }
    }

    /// Separator cell for a column of `width` display columns.
    fn separator(&self, width: usize) -> String {
        match self {
            Alignment::Left => format!(":{}", "-".repeat(width + 1)),
            Alignment::Right => format!("{}:", "-".repeat(width + 1)),
            Alignment::Center => format!(":{}:", "-".repeat(width)),
        }
    }

    fn pad(&self, cell: &str, width: usize) -> String {
        match self {
            Alignment::Left => pad_right(cell, width),
            Alignment::Right => pad_left(cell, width),
            Alignment::Center => {
                let total = width.saturating_sub(display_width(cell));
                let left = total / 2;
                format!("{}{}{}", " ".repeat(left), cell, " ".repeat(total - left))
            }
        }
    }
}

impl FromStr for Alignment {
    type Err = Csv2MdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" | "L" => Ok(Alignment::Left),
            "r" | "R" => Ok(Alignment::Right),
            "c" | "C" => Ok(Alignment::Center),
            other => Err(Csv2MdError::UnknownAlignment(other.to_string())),
        }
    }
}

/// Errors from the CSV to Markdown conversion.
#[derive(Debug, Error)]
pub enum Csv2MdError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV record {record} has {found} fields, expected {expected}")]
    FieldCount { record: usize, expected: usize, found: usize },

    #[error("no header record for Markdown table")]
    MissingHeader,

    #[error("{alignments} alignments given for {columns} columns")]
    TooManyAlignments { alignments: usize, columns: usize },

    #[error("unknown alignment {0:?}, expected \"l\", \"r\" or \"c\"")]
    UnknownAlignment(String),
}

/// Header and alignment of the table being produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    /// Header labels, used when the CSV carries no header record
    pub header: Vec<String>,
    /// Alignment per column; missing entries default to left
    pub alignment: Vec<Alignment>,
}

impl TableSpec {
    pub fn new(header: Vec<String>, alignment: Vec<Alignment>) -> Self {
        Self { header, alignment }
    }

    /// Parse an alignment list such as `["l", "r", "r"]`.
    pub fn parse_alignment(spec: &[&str]) -> Result<Vec<Alignment>, Csv2MdError> {
        spec.iter().map(|s| s.parse()).collect()
    }
}

/// Convert CSV bytes into a Markdown table.
///
/// When `has_header` is true the first CSV record is the header and
/// `spec.header` is ignored; otherwise every CSV record is a body row.
pub fn csv_to_markdown(csv: &[u8], has_header: bool, spec: &TableSpec) -> Result<String, Csv2MdError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(false).flexible(true).from_reader(csv);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(escape_cell).collect());
    }

    let header = if has_header {
        if rows.is_empty() {
            return Err(Csv2MdError::MissingHeader);
        }
        rows.remove(0)
    } else {
        if spec.header.is_empty() {
            return Err(Csv2MdError::MissingHeader);
        }
        spec.header.iter().map(|h| escape_cell(h)).collect()
    };

    let columns = header.len();
    if spec.alignment.len() > columns {
        return Err(Csv2MdError::TooManyAlignments { alignments: spec.alignment.len(), columns });
    }

    for (i, row) in rows.iter().enumerate() {
        if row.len() != columns {
            let record = if has_header { i + 2 } else { i + 1 };
            return Err(Csv2MdError::FieldCount { record, expected: columns, found: row.len() });
        }
    }

    // Separator needs at least three dashes
    let mut widths: Vec<usize> = header.iter().map(|h| display_width(h).max(3)).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }

    let alignment: Vec<Alignment> =
        (0..columns).map(|i| spec.alignment.get(i).copied().unwrap_or_default()).collect();

    let mut output = String::new();
    push_row(&mut output, &header, &widths, &alignment);
    let separators: Vec<String> = alignment.iter().zip(&widths).map(|(a, w)| a.separator(*w)).collect();
    output.push_str(&format!("|{}|\n", separators.join("|")));
    for row in &rows {
        push_row(&mut output, row, &widths, &alignment);
    }

    Ok(output)
}

fn push_row(output: &mut String, cells: &[String], widths: &[usize], alignment: &[Alignment]) {
    let padded: Vec<String> =
        cells.iter().zip(widths).zip(alignment).map(|((cell, w), a)| a.pad(cell, *w)).collect();
    output.push_str(&format!("| {} |\n", padded.join(" | ")));
}

/// Make a CSV field safe inside a pipe table cell.
fn escape_cell(field: &str) -> String {
    field.replace('|', "\\|").replace("\r\n", " ").replace('\n', " ")
}
