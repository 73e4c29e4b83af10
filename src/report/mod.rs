//! Report generation for analysis results

use std::fs;
use std::path::Path;

use crate::error::ReportError;
use crate::types::Finding;

pub mod formatter;

pub use formatter::{render_json, render_text};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    PlainText,
    Json,
}

/// Writes the findings of one analysis run to a file in the requested
/// format. Plain text is the same newline-joined form the display and
/// clipboard paths use.
pub fn write_report(
    path: &Path,
    findings: &[Finding],
    format: ReportFormat,
) -> Result<(), ReportError> {
    let rendered = match format {
        ReportFormat::PlainText => render_text(findings),
        ReportFormat::Json => render_json(findings)?,
    };
    fs::write(path, rendered)?;
    Ok(())
}
