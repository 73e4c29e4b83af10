//! Revision counter reporting

use crate::types::{Category, CoreProperties, Finding};

/// Reports the raw revision counter when the field is populated.
pub fn check_revision(props: &CoreProperties) -> Vec<Finding> {
    match props.revision.as_text() {
        Some(rev) => vec![Finding::tagged(
            Category::Revision,
            format!("Revision count: {rev}"),
        )],
        None => Vec::new(),
    }
}
