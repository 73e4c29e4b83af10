//! AI keyword scan over core-property text fields

use crate::config::AnalysisConfig;
use crate::types::{Category, CoreProperties, Finding};

/// Scans the seven core-property text fields for AI-related keywords.
///
/// One finding per matched field, reporting the whole field value; the
/// first keyword hit per field is sufficient evidence, so a field never
/// produces more than one finding.
pub fn check_keywords(props: &CoreProperties, config: &AnalysisConfig) -> Vec<Finding> {
    let fields = [
        ("author", &props.author),
        ("last_modified_by", &props.last_modified_by),
        ("comments", &props.comments),
        ("title", &props.title),
        ("subject", &props.subject),
        ("keywords", &props.keywords),
        ("category", &props.category),
    ];

    let mut findings = Vec::new();
    for (name, field) in fields {
        let Some(value) = field.as_text() else { continue };
        if AnalysisConfig::first_keyword_hit(&config.ai_keywords, value).is_some() {
            findings.push(Finding::tagged(
                Category::Keyword,
                format!("Match found in '{name}': {value}"),
            ));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn props_with_author(author: &str) -> CoreProperties {
        CoreProperties {
            author: FieldValue::from_text(author),
            ..CoreProperties::default()
        }
    }

    #[test]
    fn one_finding_per_field_not_per_keyword() {
        let config = AnalysisConfig::default();
        // Two keywords in one field still yield a single finding.
        let props = props_with_author("ChatGPT with Copilot");
        let findings = check_keywords(&props, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].to_string(),
            "[KEYWORD] Match found in 'author': ChatGPT with Copilot"
        );
    }

    #[test]
    fn clean_fields_yield_nothing() {
        let config = AnalysisConfig::default();
        let props = props_with_author("Jordan Smith");
        assert!(check_keywords(&props, &config).is_empty());
    }

    #[test]
    fn each_matched_field_reports_separately() {
        let config = AnalysisConfig::default();
        let props = CoreProperties {
            author: FieldValue::from_text("ChatGPT"),
            title: FieldValue::from_text("Written by Midjourney"),
            ..CoreProperties::default()
        };
        let findings = check_keywords(&props, &config);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].text.contains("'author'"));
        assert!(findings[1].text.contains("'title'"));
    }
}
