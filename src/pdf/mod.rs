//! PDF analysis pipeline
//!
//! The PDF half of the dispatcher: a metadata pass over the `Info`
//! dictionary followed by a content pass over extracted text, each under
//! its own section marker and each catching its own failures so a broken
//! document still produces an explanatory finding per section.

use std::path::Path;

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::types::{Category, Finding};

pub mod content;
pub mod dates;
pub mod metadata;

pub use content::check_pdf_content;
pub use metadata::check_pdf_metadata;

pub fn analyze_pdf(path: &Path, config: &AnalysisConfig) -> Vec<Finding> {
    let document = lopdf::Document::load(path);

    let mut findings = vec![Finding::section("--- PDF Metadata Analysis ---")];
    match &document {
        Ok(doc) => findings.extend(check_pdf_metadata(doc, config)),
        Err(e) => findings.push(Finding::tagged(
            Category::App,
            format!("Could not read PDF; file may be corrupt or encrypted: {e}"),
        )),
    }

    findings.push(Finding::section("--- PDF Content Analysis ---"));
    match &document {
        Ok(doc) => findings.extend(check_pdf_content(doc)),
        Err(e) => findings.push(Finding::tagged(
            Category::Content,
            format!("Could not extract text; file may be corrupt or encrypted: {e}"),
        )),
    }

    debug!(count = findings.len(), "pdf analysis complete");
    findings
}
