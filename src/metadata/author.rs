//! Author field completeness check

use crate::config::AnalysisConfig;
use crate::types::{Category, CoreProperties, FieldValue, Finding};

/// Reports a blank author field, or a populated one whose value is a
/// generic placeholder name. Any other author produces nothing.
pub fn check_author(props: &CoreProperties, config: &AnalysisConfig) -> Vec<Finding> {
    match &props.author {
        FieldValue::Absent | FieldValue::Blank => {
            vec![Finding::tagged(Category::Author, "Author field is blank.")]
        }
        FieldValue::Value(author) if config.is_generic_author(author) => {
            vec![Finding::tagged(
                Category::Author,
                format!("Author field value: '{author}'"),
            )]
        }
        FieldValue::Value(_) => Vec::new(),
    }
}
