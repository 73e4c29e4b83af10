//! Content checkers for the document body
//!
//! The body scan is shared by the statistics and formatting checkers;
//! tracked changes and comments read their parts independently so a
//! malformed part cannot silence its siblings.

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::package::{DocumentPackage, DOCUMENT_PART};
use crate::types::{Category, Finding};

pub mod body;
pub mod comments;
pub mod formatting;
pub mod stats;
pub mod track_changes;

pub use body::Paragraph;

/// Runs every content checker against one package, in fixed order:
/// statistics, tracked changes, comments, formatting.
pub fn run_content_checks(package: &mut DocumentPackage, config: &AnalysisConfig) -> Vec<Finding> {
    let mut findings = vec![Finding::section("--- Content Analysis ---")];

    let body = package
        .read_part(DOCUMENT_PART)
        .and_then(|bytes| body::scan_body(&bytes));

    match &body {
        Ok(paragraphs) => findings.extend(stats::check_stats(paragraphs)),
        Err(e) => findings.push(Finding::tagged(
            Category::Content,
            format!("Error computing document statistics: {e}"),
        )),
    }

    findings.extend(track_changes::check_track_changes(package));
    findings.extend(comments::extract_comments(package, config));

    match &body {
        Ok(paragraphs) => {
            let catalog = formatting::StyleCatalog::load(package);
            findings.extend(formatting::check_formatting(paragraphs, &catalog));
        }
        Err(e) => findings.push(Finding::tagged(
            Category::Format,
            format!("Error analyzing formatting: {e}"),
        )),
    }

    if !findings.iter().any(Finding::is_observation) {
        findings.push(Finding::placeholder(None, "No content characteristics found."));
    }
    debug!(count = findings.len(), "content checks complete");
    findings
}
