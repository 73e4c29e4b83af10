//! Word and paragraph statistics

use crate::types::{Category, Finding};

use super::body::Paragraph;

/// Reports basic size statistics over the non-empty body paragraphs.
/// The derived metrics (average, shortest, longest) are omitted when the
/// document has no non-empty paragraphs.
pub fn check_stats(paragraphs: &[Paragraph]) -> Vec<Finding> {
    let word_counts: Vec<usize> = paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .map(Paragraph::word_count)
        .collect();

    let total_paragraphs = word_counts.len();
    let total_words: usize = word_counts.iter().sum();

    let mut findings = vec![
        Finding::tagged(
            Category::Content,
            format!("Non-empty paragraphs: {total_paragraphs}"),
        ),
        Finding::tagged(Category::Content, format!("Total words: {total_words}")),
    ];

    if total_paragraphs > 0 {
        let average = total_words as f64 / total_paragraphs as f64;
        findings.push(Finding::tagged(
            Category::Content,
            format!("Average words per paragraph: {average:.1}"),
        ));
        findings.push(Finding::tagged(
            Category::Content,
            format!(
                "Shortest paragraph: {} word(s)",
                word_counts.iter().min().unwrap()
            ),
        ));
        findings.push(Finding::tagged(
            Category::Content,
            format!(
                "Longest paragraph: {} word(s)",
                word_counts.iter().max().unwrap()
            ),
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            style_id: None,
        }
    }

    #[test]
    fn reports_counts_and_extremes() {
        let paragraphs = vec![
            paragraph("one two three"),
            paragraph("   "),
            paragraph("four"),
        ];
        let findings = check_stats(&paragraphs);
        let lines: Vec<&str> = findings.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "Non-empty paragraphs: 2",
                "Total words: 4",
                "Average words per paragraph: 2.0",
                "Shortest paragraph: 1 word(s)",
                "Longest paragraph: 3 word(s)",
            ]
        );
    }

    #[test]
    fn empty_document_reports_zero_counts_only() {
        let findings = check_stats(&[paragraph(""), paragraph(" ")]);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].text, "Non-empty paragraphs: 0");
        assert_eq!(findings[1].text, "Total words: 0");
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let findings = check_stats(&[paragraph("a b"), paragraph("c d e")]);
        assert!(findings
            .iter()
            .any(|f| f.text == "Average words per paragraph: 2.5"));
    }
}
