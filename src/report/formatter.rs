//! Finding rendering

use crate::error::ReportError;
use crate::types::Finding;

/// Newline-joined display form, UTF-8, with a trailing newline. Suitable
/// for the text widget, a saved report, or a clipboard write.
pub fn render_text(findings: &[Finding]) -> String {
    let mut out = String::new();
    for finding in findings {
        out.push_str(&finding.to_string());
        out.push('\n');
    }
    out
}

/// Structured form carrying the category tag and kind alongside each
/// line, for consumers that apply their own presentation.
pub fn render_json(findings: &[Finding]) -> Result<String, ReportError> {
    serde_json::to_string_pretty(findings).map_err(|e| ReportError::SerializationError(e.to_string()))
}
