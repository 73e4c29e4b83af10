//! Google Docs export detection
//!
//! A `.docx` exported from Google Docs carries none of the Word-native
//! revision machinery, so several of this tool's signals are unreliable
//! for such files. When the creating application names Google, a fixed
//! set of caveats is emitted so the reader can weigh the other findings.

use crate::types::{Category, Finding};

use super::AppPart;

const CAVEATS: [&str; 4] = [
    "Exported from Google Docs: RSID sessions will be absent (Google Docs \
     does not use Word's RSID revision system).",
    "Revision count in metadata reflects the export count, not actual editing history.",
    "Timestamps represent the export date from Google Docs, not the original creation date.",
    "Tracked changes will not appear; Google Docs change tracking is not \
     preserved in .docx exports.",
];

pub fn check_gdocs(app: &AppPart) -> Vec<Finding> {
    let AppPart::Present(props) = app else {
        return Vec::new();
    };
    let Some(application) = props.application.as_text() else {
        return Vec::new();
    };
    if !application.to_lowercase().contains("google") {
        return Vec::new();
    }
    CAVEATS
        .iter()
        .map(|caveat| Finding::tagged(Category::Gdocs, *caveat))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppProperties, FieldValue};

    fn app(name: &str) -> AppPart {
        AppPart::Present(AppProperties {
            application: FieldValue::from_text(name),
            app_version: FieldValue::Absent,
        })
    }

    #[test]
    fn google_docs_export_emits_all_four_caveats() {
        let findings = check_gdocs(&app("Google Docs"));
        assert_eq!(findings.len(), 4);
        assert!(findings.iter().all(|f| f.category == Some(Category::Gdocs)));
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        assert_eq!(check_gdocs(&app("GOOGLE DOCS RENDERER")).len(), 4);
    }

    #[test]
    fn word_documents_emit_nothing() {
        assert!(check_gdocs(&app("Microsoft Office Word")).is_empty());
        assert!(check_gdocs(&AppPart::Missing).is_empty());
    }
}
