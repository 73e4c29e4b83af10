//! File analyzer (dispatcher)
//!
//! Routes a path to the Word pipeline, the PDF pipeline, or the minimal
//! XML pass based on its extension, concatenates the results in fixed
//! section order, and applies the final "nothing informative found"
//! collapse. This function never returns an error: every failure mode
//! becomes a descriptive finding, so the presentation layer only renders.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::NsReader;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::content;
use crate::error::{Error, Result};
use crate::metadata;
use crate::package::DocumentPackage;
use crate::pdf;
use crate::rsid;
use crate::types::Finding;

/// Analyzes one file, returning the ordered findings sequence.
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> Vec<Finding> {
    if !path.exists() {
        return vec![Finding::note("Error: File not found. Please check the path.")];
    }

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    info!(path = %path.display(), %extension, "analyzing file");
    let findings = match extension.as_str() {
        "docx" => analyze_docx(path, config),
        "pdf" => pdf::analyze_pdf(path, config),
        "xml" => analyze_xml(path),
        _ => vec![Finding::note(
            "Error: This tool accepts .docx, .pdf, and .xml files only.",
        )],
    };

    collapse_if_uninformative(findings)
}

/// Word pipeline: metadata checkers, RSID analyzer, content checkers, in
/// that order, against one package opened for the duration of the call.
/// An unopenable package aborts all three groups with a single finding,
/// since every checker depends on archive access.
fn analyze_docx(path: &Path, config: &AnalysisConfig) -> Vec<Finding> {
    let mut package = match DocumentPackage::open(path) {
        Ok(package) => package,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not open package");
            return vec![open_failure_finding(e)];
        }
    };

    let mut findings = metadata::run_metadata_checks(&mut package, config);
    findings.extend(rsid::analyze_rsids(&mut package));
    findings.extend(content::run_content_checks(&mut package, config));
    findings
}

fn open_failure_finding(error: Error) -> Finding {
    match error {
        Error::NotFound(_) => Finding::note("Error: File not found. Please check the path."),
        Error::PermissionDenied(_) => Finding::note(
            "Error: You do not have permission to access this file. Please check \
             file permissions or close the file if it's open in another program.",
        ),
        Error::InvalidPackage(_) => {
            Finding::note("Error: The file is not a valid .docx file or it is corrupted.")
        }
        other => Finding::note(format!(
            "An unexpected error occurred while processing the .docx file: {other}"
        )),
    }
}

/// Minimal XML pass: well-formedness only, no semantic analysis.
fn analyze_xml(path: &Path) -> Vec<Finding> {
    let mut findings = vec![Finding::section("--- XML Analysis ---")];
    match validate_xml(path) {
        Ok(()) => findings.push(Finding::note(
            "Successfully parsed XML file. (No specific AI/RSID analysis for generic XML)",
        )),
        Err(e) => findings.push(Finding::note(format!("Error processing .xml file: {e}"))),
    }
    findings
}

/// Streams the whole document through the parser. Bounded by input size;
/// no external entities or DTD expansion are processed.
fn validate_xml(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::from_io(e, path))?;
    let mut reader = NsReader::from_reader(BufReader::new(file));
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if matches!(reader.read_event_into(&mut buf)?, Event::Eof) {
            return Ok(());
        }
    }
}

/// When every finding is a section marker or an empty-handed placeholder,
/// the whole result is replaced by one blanket line instead of a wall of
/// headers.
fn collapse_if_uninformative(findings: Vec<Finding>) -> Vec<Finding> {
    if findings.iter().any(Finding::is_observation) {
        findings
    } else {
        vec![Finding::note(
            "No specific AI characteristics or RSID sessions found.",
        )]
    }
}
