// Copyright 2026 The bench-report Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod ui;

use bench_report::{MeasurementRecord, render};
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let records = match read_records(args.input.as_deref()) {
        Ok(records) => records,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };
    debug!("Loaded {} records", records.len());

    let config = args.to_config();

    let result = match args.output {
        Some(ref path) => File::create(path)
            .map_err(|e| format!("Failed to create {}: {}", path.display(), e))
            .and_then(|file| write_report(args.format, &records, &config, BufWriter::new(file))),
        None => write_report(args.format, &records, &config, io::stdout().lock()),
    };

    if let Err(e) = result {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if let Some(ref path) = args.output {
        ui::status(&format!("wrote {} report to {}", args.format, path.display()));
    }
}

/// Read the JSON record array from a file, or stdin when no path is given
fn read_records(path: Option<&Path>) -> Result<Vec<MeasurementRecord>, String> {
    let content = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(|e| format!("Failed to read stdin: {}", e))?;
            buf
        }
    };

    serde_json::from_str(&content).map_err(|e| format!("Invalid benchmark records: {}", e))
}

/// Render and flush, turning any failure into a printable message
fn write_report<W: Write>(
    format: bench_report::OutputFormat,
    records: &[MeasurementRecord],
    config: &bench_report::ReportConfig,
    mut sink: W,
) -> Result<(), String> {
    render(format, records, config, &mut sink).map_err(|e| e.to_string())?;
    sink.flush().map_err(|e| format!("Failed to write report: {}", e))
}
