//! Metadata checkers for OOXML packages
//!
//! Each checker is a stateless function from parsed properties to zero or
//! more findings. The orchestrator reads the shared parts once, fans the
//! results out to the checkers in a fixed order, and appends a placeholder
//! when nothing was observed. Checker failures never escape this module;
//! they are converted to findings and the remaining checkers still run.

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::Error;
use crate::package::{DocumentPackage, CORE_PROPS_PART};
use crate::types::{AppProperties, CoreProperties, Finding};

pub mod app;
pub mod author;
pub mod gdocs;
pub mod keywords;
pub mod revision;
pub mod scrape;
pub mod timestamps;

/// Outcome of looking up `docProps/app.xml`, shared by the app checker
/// and the Google Docs detector so the part is read only once.
#[derive(Debug, Clone)]
pub enum AppPart {
    Missing,
    Unreadable(String),
    Present(AppProperties),
}

/// Runs every metadata checker against one package, in fixed order.
pub fn run_metadata_checks(
    package: &mut DocumentPackage,
    config: &AnalysisConfig,
) -> Vec<Finding> {
    let mut findings = vec![Finding::section("--- Metadata Analysis ---")];

    let props = match package.core_properties() {
        Ok(props) => props,
        Err(e) => {
            findings.push(Finding::note(format!(
                "An unexpected error occurred during metadata scan: {e}"
            )));
            CoreProperties::default()
        }
    };
    let core_present = package.has_part(CORE_PROPS_PART);

    let app_part = match package.app_properties() {
        Ok(props) => AppPart::Present(props),
        Err(Error::PartMissing(_)) => AppPart::Missing,
        Err(e) => AppPart::Unreadable(e.to_string()),
    };

    findings.extend(app::check_app_properties(&app_part));
    findings.extend(gdocs::check_gdocs(&app_part));
    findings.extend(scrape::check_scrape_indicators(core_present, &props));
    findings.extend(keywords::check_keywords(&props, config));
    findings.extend(revision::check_revision(&props));
    findings.extend(timestamps::check_timestamps(&props));
    findings.extend(author::check_author(&props, config));

    if !findings.iter().any(Finding::is_observation) {
        findings.push(Finding::placeholder(
            None,
            "No additional metadata characteristics found.",
        ));
    }
    debug!(count = findings.len(), "metadata checks complete");
    findings
}
