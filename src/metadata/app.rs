//! Creating-application check

use crate::types::{Category, FieldValue, Finding};

use super::AppPart;

/// Reports the application that created the document, from the package's
/// extended properties. A missing part, a blank field, and a populated
/// field are three distinct conditions.
pub fn check_app_properties(app: &AppPart) -> Vec<Finding> {
    let props = match app {
        AppPart::Missing => {
            return vec![Finding::tagged(
                Category::App,
                "docProps/app.xml not found; creating application unknown.",
            )]
        }
        AppPart::Unreadable(message) => {
            return vec![Finding::tagged(
                Category::App,
                format!("Error reading app properties: {message}"),
            )]
        }
        AppPart::Present(props) => props,
    };

    let mut findings = Vec::new();
    match &props.application {
        FieldValue::Value(application) => findings.push(Finding::tagged(
            Category::App,
            format!("Created with: {application}"),
        )),
        _ => findings.push(Finding::tagged(Category::App, "Application field is blank.")),
    }
    if let Some(version) = props.app_version.as_text() {
        findings.push(Finding::tagged(Category::App, format!("App version: {version}")));
    }
    findings
}
