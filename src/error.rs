//! Error types for report rendering.

use crate::csv2md::Csv2MdError;
use crate::sysinfo::SysInfoError;
use std::io;
use thiserror::Error;

/// Everything that can abort a render.
///
/// A render that returns an error has written an incomplete report; callers
/// should discard whatever reached the sink.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The record set was empty.
    #[error("no benchmark records to render")]
    EmptyInput,

    /// The output sink rejected a write.
    #[error("failed to write report: {0}")]
    Sink(#[source] io::Error),

    /// CSV serialization failed for a reason other than I/O.
    #[error("CSV serialization failed: {0}")]
    Csv(#[source] csv::Error),

    /// The CSV to Markdown conversion failed.
    #[error("Markdown conversion failed: {0}")]
    Markdown(#[from] Csv2MdError),

    /// The system information probe failed.
    #[error("system information unavailable: {0}")]
    SystemInfo(#[from] SysInfoError),
}

impl From<io::Error> for ReportError {
    fn from(err: io::Error) -> Self {
        ReportError::Sink(err)
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return ReportError::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => ReportError::Sink(e),
            other => ReportError::Sink(io::Error::other(format!("{:?}", other))),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
