//! PDF metadata checker
//!
//! Reads the trailer's `Info` dictionary. The dictionary being absent is
//! its own condition, reported before any field is examined; with the
//! dictionary present, each field is reported independently and the
//! expanded AI keyword list is scanned over every text field.

use chrono::{DateTime, Utc};
use lopdf::{Dictionary, Document, Object};

use crate::config::AnalysisConfig;
use crate::types::{Category, FieldValue, Finding, PdfDate, PdfMetadata};

use super::dates::parse_pdf_date;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn check_pdf_metadata(doc: &Document, config: &AnalysisConfig) -> Vec<Finding> {
    let Some(info) = info_dictionary(doc) else {
        return vec![Finding::placeholder(
            Some(Category::App),
            "No metadata found in PDF.",
        )];
    };

    let meta = read_metadata(doc, info);
    let mut findings = Vec::new();

    // Creator: the originating application, e.g. "Google Docs".
    match meta.creator.as_text() {
        Some(creator) => findings.push(Finding::tagged(
            Category::App,
            format!("Created with: {creator}"),
        )),
        None => findings.push(Finding::tagged(
            Category::App,
            "Creator application field is blank.",
        )),
    }

    // Producer: the PDF engine, e.g. "Skia/PDF", "pdfTeX".
    if let Some(producer) = meta.producer.as_text() {
        findings.push(Finding::tagged(
            Category::App,
            format!("PDF producer: {producer}"),
        ));
    }

    match meta.author.as_text() {
        Some(author) => findings.push(Finding::tagged(
            Category::Author,
            format!("Author: {author}"),
        )),
        None => findings.push(Finding::tagged(Category::Author, "Author field is blank.")),
    }

    for (label, field) in [
        ("title", &meta.title),
        ("subject", &meta.subject),
        ("keywords", &meta.keywords),
    ] {
        if let Some(value) = field.as_text() {
            findings.push(Finding::tagged(
                Category::Content,
                format!("PDF {label}: {value}"),
            ));
        }
    }

    if let Some(text) = date_display(&meta.creation_date) {
        findings.push(Finding::tagged(
            Category::Timestamp,
            format!("PDF created: {text}"),
        ));
    }
    if let Some(text) = date_display(&meta.modification_date) {
        findings.push(Finding::tagged(
            Category::Timestamp,
            format!("PDF modified: {text}"),
        ));
    }

    findings.extend(scan_for_ai_keywords(&meta, config));
    findings
}

/// One finding per (field, keyword) hit across the six text fields.
fn scan_for_ai_keywords(meta: &PdfMetadata, config: &AnalysisConfig) -> Vec<Finding> {
    let fields = [
        ("Creator", &meta.creator),
        ("Producer", &meta.producer),
        ("Author", &meta.author),
        ("Title", &meta.title),
        ("Subject", &meta.subject),
        ("Keywords", &meta.keywords),
    ];

    let mut findings = Vec::new();
    for (name, field) in fields {
        let Some(value) = field.as_text() else { continue };
        let lower = value.to_lowercase();
        for keyword in &config.pdf_ai_keywords {
            if lower.contains(&keyword.to_lowercase()) {
                findings.push(Finding::tagged(
                    Category::Keyword,
                    format!("AI keyword '{keyword}' found in PDF {name}: {value}"),
                ));
            }
        }
    }
    findings
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn read_metadata(doc: &Document, info: &Dictionary) -> PdfMetadata {
    PdfMetadata {
        creator: string_field(doc, info, b"Creator"),
        producer: string_field(doc, info, b"Producer"),
        author: string_field(doc, info, b"Author"),
        title: string_field(doc, info, b"Title"),
        subject: string_field(doc, info, b"Subject"),
        keywords: string_field(doc, info, b"Keywords"),
        creation_date: date_field(doc, info, b"CreationDate"),
        modification_date: date_field(doc, info, b"ModDate"),
    }
}

fn string_field(doc: &Document, info: &Dictionary, key: &[u8]) -> FieldValue {
    match info.get(key) {
        Ok(obj) => match resolve_string(doc, obj) {
            Some(text) => FieldValue::from_text(text),
            None => FieldValue::Absent,
        },
        Err(_) => FieldValue::Absent,
    }
}

/// Field values may be stored indirectly; follow one level of references.
fn resolve_string(doc: &Document, obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
            _ => None,
        },
        _ => None,
    }
}

fn date_field(doc: &Document, info: &Dictionary, key: &[u8]) -> PdfDate {
    let raw = string_field(doc, info, key);
    let parsed = raw.as_text().and_then(parse_pdf_date);
    PdfDate { raw, parsed }
}

/// Renders a date field: the parsed UTC timestamp when the `D:` syntax is
/// well-formed, the raw string otherwise, nothing when absent.
fn date_display(date: &PdfDate) -> Option<String> {
    match (&date.parsed, date.raw.as_text()) {
        (Some(parsed), _) => Some(format_utc(*parsed)),
        (None, Some(raw)) => Some(raw.to_string()),
        (None, None) => None,
    }
}

fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// PDF text strings are UTF-16BE when BOM-prefixed; everything else is
/// treated as Latin-1, which subsumes PDFDocEncoding for the printable
/// range.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let (decoded, _, _) = encoding_rs::UTF_16BE.decode(rest);
        decoded.into_owned()
    } else {
        bytes.iter().map(|&b| b as char).collect()
    }
}
