use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::MatchReport;

/// Errors that can occur while writing a match report
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write a match report to a file as JSON.
pub fn write_report<P: AsRef<Path>>(
    report: &MatchReport,
    path: P,
    pretty: bool,
) -> Result<(), ExportError> {
    let body = render(report, pretty)?;
    fs::write(path.as_ref(), body)?;

    info!("Report written to {}", path.as_ref().display());
    Ok(())
}

/// Print a match report to stdout as JSON.
pub fn print_report(report: &MatchReport, pretty: bool) -> Result<(), ExportError> {
    let body = render(report, pretty)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn render(report: &MatchReport, pretty: bool) -> Result<String, ExportError> {
    let body = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(body)
}
