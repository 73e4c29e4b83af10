//! Tracked change counting

use quick_xml::events::Event;
use quick_xml::NsReader;

use crate::error::{Error, Result};
use crate::package::{element_in, DocumentPackage, DOCUMENT_PART, W_NS};
use crate::types::{Category, Finding};

/// Counts tracked insertions (`w:ins`) and deletions (`w:del`) anywhere in
/// the document body, nested occurrences included.
pub fn check_track_changes(package: &mut DocumentPackage) -> Vec<Finding> {
    let bytes = match package.read_part(DOCUMENT_PART) {
        Ok(bytes) => bytes,
        Err(Error::PartMissing(_)) => {
            return vec![Finding::tagged(
                Category::Track,
                "word/document.xml not found.",
            )]
        }
        Err(e) => {
            return vec![Finding::tagged(
                Category::Track,
                format!("Error checking track changes: {e}"),
            )]
        }
    };

    match count_revision_marks(&bytes) {
        Ok((0, 0)) => vec![Finding::placeholder(
            Some(Category::Track),
            "No tracked changes found in document.",
        )],
        Ok((insertions, deletions)) => vec![
            Finding::tagged(
                Category::Track,
                format!("Tracked insertions found: {insertions}"),
            ),
            Finding::tagged(
                Category::Track,
                format!("Tracked deletions found: {deletions}"),
            ),
        ],
        Err(e) => vec![Finding::tagged(
            Category::Track,
            format!("Error checking track changes: {e}"),
        )],
    }
}

fn count_revision_marks(bytes: &[u8]) -> Result<(usize, usize)> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut insertions = 0usize;
    let mut deletions = 0usize;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"ins" => insertions += 1,
                    b"del" => deletions += 1,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((insertions, deletions))
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    #[test]
    fn counts_nested_revision_marks() {
        let xml = format!(
            r#"<w:document xmlns:w="{W}"><w:body>
                 <w:p>
                   <w:ins w:id="1" w:author="A"><w:r><w:t>added</w:t></w:r></w:ins>
                   <w:ins w:id="2" w:author="A">
                     <w:del w:id="3" w:author="B"/>
                   </w:ins>
                 </w:p>
               </w:body></w:document>"#
        );
        assert_eq!(count_revision_marks(xml.as_bytes()).unwrap(), (2, 1));
    }

    #[test]
    fn document_without_marks_counts_zero() {
        let xml = format!(
            r#"<w:document xmlns:w="{W}"><w:body><w:p/></w:body></w:document>"#
        );
        assert_eq!(count_revision_marks(xml.as_bytes()).unwrap(), (0, 0));
    }
}
