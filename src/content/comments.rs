//! Inline comment extraction

use quick_xml::events::Event;
use quick_xml::NsReader;

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::package::{element_in, ns_attr, DocumentPackage, COMMENTS_PART, W_NS};
use crate::types::{Category, Finding};

#[derive(Debug, Default)]
struct Comment {
    author: Option<String>,
    date: Option<String>,
    runs: Vec<String>,
}

/// Extracts every inline comment from `word/comments.xml`, reporting a
/// leading count and then one finding per comment in document order with
/// its author, date (day portion only), and truncated text.
pub fn extract_comments(package: &mut DocumentPackage, config: &AnalysisConfig) -> Vec<Finding> {
    let bytes = match package.read_part(COMMENTS_PART) {
        Ok(bytes) => bytes,
        Err(Error::PartMissing(_)) => {
            return vec![Finding::placeholder(
                Some(Category::Comment),
                "No comments found in document.",
            )]
        }
        Err(e) => {
            return vec![Finding::tagged(
                Category::Comment,
                format!("Error extracting comments: {e}"),
            )]
        }
    };

    let comments = match parse_comments(&bytes) {
        Ok(comments) => comments,
        Err(e) => {
            return vec![Finding::tagged(
                Category::Comment,
                format!("Error extracting comments: {e}"),
            )]
        }
    };

    if comments.is_empty() {
        return vec![Finding::placeholder(
            Some(Category::Comment),
            "No comments found in document.",
        )];
    }

    let mut findings = vec![Finding::tagged(
        Category::Comment,
        format!("{} comment(s) found.", comments.len()),
    )];
    for comment in &comments {
        let author = comment.author.as_deref().unwrap_or("Unknown");
        let date = comment
            .date
            .as_deref()
            .map(|d| d.split('T').next().unwrap_or(d))
            .unwrap_or("");
        let body = truncate(
            comment.runs.join(" ").trim(),
            config.comment_preview_chars,
        );
        findings.push(Finding::tagged(
            Category::Comment,
            format!("Author: \"{author}\" | Date: {date} | Text: \"{body}\""),
        ));
    }
    findings
}

fn parse_comments(bytes: &[u8]) -> Result<Vec<Comment>> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut comments = Vec::new();
    let mut current: Option<Comment> = None;
    let mut text_depth = 0usize;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"comment" => {
                        current = Some(Comment {
                            author: ns_attr(&reader, &e, W_NS, b"author"),
                            date: ns_attr(&reader, &e, W_NS, b"date"),
                            runs: Vec::new(),
                        });
                    }
                    b"t" if current.is_some() => text_depth += 1,
                    _ => {}
                }
            }
            Event::Text(t) => {
                if text_depth > 0 {
                    if let Some(comment) = current.as_mut() {
                        comment.runs.push(t.unescape()?.into_owned());
                    }
                }
            }
            Event::End(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"comment" => {
                        if let Some(comment) = current.take() {
                            comments.push(comment);
                        }
                        text_depth = 0;
                    }
                    b"t" => text_depth = text_depth.saturating_sub(1),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(comments)
}

/// Truncates to `limit` characters, replacing the tail with an ellipsis
/// marker. Operates on characters, not bytes, so multi-byte text is safe.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let kept: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{kept}...")
}
