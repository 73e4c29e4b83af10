//! PDF content statistics

use lopdf::Document;

use crate::types::{Category, Finding};

/// Extracts per-page text and reports page count, word count, estimated
/// paragraph blocks, and average words per page. Encrypted or image-based
/// PDFs yield no usable text; that is reported and the derived statistics
/// are skipped.
pub fn check_pdf_content(doc: &Document) -> Vec<Finding> {
    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut findings = vec![Finding::tagged(
        Category::Content,
        format!("Page count: {page_count}"),
    )];

    let mut full_text = String::new();
    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) => {
                full_text.push_str(&text);
                full_text.push('\n');
            }
            Err(e) => {
                findings.push(Finding::tagged(
                    Category::Content,
                    format!("Could not extract text; file may be corrupt or encrypted: {e}"),
                ));
                return findings;
            }
        }
    }

    if full_text.trim().is_empty() {
        findings.push(Finding::placeholder(
            Some(Category::Content),
            "No extractable text found (PDF may be image-based or encrypted).",
        ));
        return findings;
    }

    let word_count = full_text.split_whitespace().count();
    findings.push(Finding::tagged(
        Category::Content,
        format!("Total word count: {word_count}"),
    ));

    let paragraph_blocks = full_text
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .count();
    findings.push(Finding::tagged(
        Category::Content,
        format!("Estimated paragraph blocks: {paragraph_blocks}"),
    ));

    if page_count > 0 {
        let average = (word_count as f64 / page_count as f64).round() as usize;
        findings.push(Finding::tagged(
            Category::Content,
            format!("Average words per page: {average}"),
        ));
    }

    findings
}
