//! Document body scan
//!
//! One pass over `word/document.xml` collecting, per paragraph, the
//! concatenated text of its runs and the paragraph style reference. The
//! statistics and formatting checkers both consume this scan; paragraphs
//! inside table cells are included.

use quick_xml::events::Event;
use quick_xml::NsReader;

use crate::error::Result;
use crate::package::{element_in, ns_attr, W_NS};

/// One body paragraph: run text plus the raw `w:pStyle` reference
/// (`None` means the document-default paragraph style applies).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style_id: Option<String>,
}

impl Paragraph {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub fn scan_body(bytes: &[u8]) -> Result<Vec<Paragraph>> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<Paragraph> = None;
    let mut text_depth = 0usize;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"p" => current = Some(Paragraph::default()),
                    b"t" if current.is_some() => text_depth += 1,
                    b"pStyle" => {
                        if let (Some(paragraph), Some(style)) =
                            (current.as_mut(), ns_attr(&reader, &e, W_NS, b"val"))
                        {
                            paragraph.style_id = Some(style);
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    // A self-closing paragraph has no content at all.
                    b"p" => paragraphs.push(Paragraph::default()),
                    b"pStyle" => {
                        if let (Some(paragraph), Some(style)) =
                            (current.as_mut(), ns_attr(&reader, &e, W_NS, b"val"))
                        {
                            paragraph.style_id = Some(style);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                if text_depth > 0 {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.text.push_str(&t.unescape()?);
                    }
                }
            }
            Event::End(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"p" => {
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                    b"t" => text_depth = text_depth.saturating_sub(1),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    #[test]
    fn collects_run_text_and_style_per_paragraph() {
        let xml = format!(
            r#"<w:document xmlns:w="{W}"><w:body>
                 <w:p>
                   <w:pPr><w:pStyle w:val="Heading1"/></w:pPr>
                   <w:r><w:t>Title</w:t></w:r>
                 </w:p>
                 <w:p><w:r><w:t>Plain </w:t></w:r><w:r><w:t>text.</w:t></w:r></w:p>
                 <w:p/>
               </w:body></w:document>"#
        );
        let paragraphs = scan_body(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].style_id.as_deref(), Some("Heading1"));
        assert_eq!(paragraphs[0].text, "Title");
        assert_eq!(paragraphs[1].text, "Plain text.");
        assert_eq!(paragraphs[1].word_count(), 2);
        assert!(paragraphs[2].is_empty());
    }

    #[test]
    fn table_cell_paragraphs_are_included() {
        let xml = format!(
            r#"<w:document xmlns:w="{W}"><w:body>
                 <w:tbl><w:tr><w:tc>
                   <w:p><w:r><w:t>cell text</w:t></w:r></w:p>
                 </w:tc></w:tr></w:tbl>
               </w:body></w:document>"#
        );
        let paragraphs = scan_body(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "cell text");
    }

    #[test]
    fn text_outside_runs_is_ignored() {
        let xml = format!(
            r#"<w:document xmlns:w="{W}"><w:body>
                 <w:p><w:r><w:instrText>PAGEREF</w:instrText><w:t>visible</w:t></w:r></w:p>
               </w:body></w:document>"#
        );
        let paragraphs = scan_body(xml.as_bytes()).unwrap();
        assert_eq!(paragraphs[0].text, "visible");
    }
}
