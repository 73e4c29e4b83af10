//! Paragraph style distribution
//!
//! Styles are reported by their resolved display names: `w:pStyle`
//! references are looked up in `word/styles.xml`, paragraphs without a
//! reference fall back to the document-default paragraph style, and a raw
//! style id is used when the catalog cannot resolve it.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::NsReader;
use tracing::debug;

use crate::error::Result;
use crate::package::{element_in, ns_attr, DocumentPackage, STYLES_PART, W_NS};
use crate::types::{Category, Finding, StyleDistribution};

use super::body::Paragraph;

/// Style prefixes treated as structural rather than body content when
/// judging formatting uniformity.
const STRUCTURAL_PREFIXES: [&str; 4] = ["heading", "title", "subtitle", "toc"];

/// Resolved style names from `word/styles.xml`.
#[derive(Debug, Default)]
pub struct StyleCatalog {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleCatalog {
    /// Loads the catalog; a package without a styles part resolves
    /// everything through fallbacks.
    pub fn load(package: &mut DocumentPackage) -> Self {
        match package.read_part(STYLES_PART) {
            Ok(bytes) => parse_styles(&bytes).unwrap_or_default(),
            Err(_) => StyleCatalog::default(),
        }
    }

    pub fn resolve(&self, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => self
                .names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            None => self
                .default_paragraph
                .clone()
                .unwrap_or_else(|| "Normal".to_string()),
        }
    }
}

/// Reports the distribution of paragraph styles over non-empty paragraphs
/// and flags the uniformity signal when every body style in use reduces to
/// a single one.
pub fn check_formatting(paragraphs: &[Paragraph], catalog: &StyleCatalog) -> Vec<Finding> {
    let mut distribution = StyleDistribution::default();
    for paragraph in paragraphs.iter().filter(|p| !p.is_empty()) {
        distribution.record(&catalog.resolve(paragraph.style_id.as_deref()));
    }

    if distribution.is_empty() {
        return vec![Finding::placeholder(
            Some(Category::Format),
            "No non-empty paragraphs found for style analysis.",
        )];
    }

    let mut findings = vec![Finding::tagged(
        Category::Format,
        "Paragraph style distribution:",
    )];
    for (style, count) in distribution.ranked() {
        findings.push(Finding::tagged(
            Category::Format,
            format!("  {style}: {count} paragraph(s)"),
        ));
    }

    let body_styles: Vec<&str> = distribution
        .style_names()
        .filter(|name| {
            let lower = name.to_lowercase();
            !STRUCTURAL_PREFIXES.iter().any(|p| lower.starts_with(p))
        })
        .collect();
    if body_styles.len() == 1 {
        findings.push(Finding::tagged(
            Category::Format,
            format!(
                "All body paragraphs use a single style: '{}'",
                body_styles[0]
            ),
        ));
    }

    findings
}

fn parse_styles(bytes: &[u8]) -> Result<StyleCatalog> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut catalog = StyleCatalog::default();
    // (style id, is default paragraph style) for the w:style being read
    let mut current: Option<(Option<String>, bool)> = None;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"style" => {
                        let style_type = ns_attr(&reader, &e, W_NS, b"type");
                        let is_paragraph = style_type.as_deref() == Some("paragraph");
                        let is_default = is_paragraph
                            && matches!(
                                ns_attr(&reader, &e, W_NS, b"default").as_deref(),
                                Some("1") | Some("true")
                            );
                        current = Some((ns_attr(&reader, &e, W_NS, b"styleId"), is_default));
                    }
                    b"name" => {
                        if let (Some((style_id, is_default)), Some(name)) =
                            (current.as_ref(), ns_attr(&reader, &e, W_NS, b"val"))
                        {
                            if let Some(id) = style_id {
                                catalog.names.insert(id.clone(), name.clone());
                            }
                            if *is_default {
                                catalog.default_paragraph = Some(name);
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::End(e) => {
                if element_in(&reader, e.name(), W_NS) && e.local_name().as_ref() == b"style" {
                    current = None;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(styles = catalog.names.len(), "style catalog loaded");
    Ok(catalog)
}
