//! OOXML package access
//!
//! A `.docx` file is a ZIP archive of XML parts. `DocumentPackage` wraps
//! the archive read-only and hands out raw part bytes on demand; the
//! per-part parsers live next to the checkers that consume them. One
//! package is opened per analysis call and dropped at the end of the call,
//! never cached across calls.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::NsReader;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{Error, Result};

pub mod app_props;
pub mod core_props;

pub use app_props::parse_app_properties;
pub use core_props::parse_core_properties;

/// Word-schema namespace. All `w:` element and attribute lookups resolve
/// against this URI by (namespace, local name), never by prefix text.
pub const W_NS: &[u8] = b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Extended-properties namespace (`docProps/app.xml`).
pub const EP_NS: &[u8] =
    b"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
/// Core-properties namespace (`docProps/core.xml`).
pub const CP_NS: &[u8] = b"http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
/// Dublin Core element namespace.
pub const DC_NS: &[u8] = b"http://purl.org/dc/elements/1.1/";
/// Dublin Core terms namespace (typed created/modified timestamps).
pub const DCTERMS_NS: &[u8] = b"http://purl.org/dc/terms/";

/// Well-known part names.
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const SETTINGS_PART: &str = "word/settings.xml";
pub const COMMENTS_PART: &str = "word/comments.xml";
pub const STYLES_PART: &str = "word/styles.xml";
pub const CORE_PROPS_PART: &str = "docProps/core.xml";
pub const APP_PROPS_PART: &str = "docProps/app.xml";

/// One opened `.docx` package.
pub struct DocumentPackage {
    archive: ZipArchive<BufReader<File>>,
}

impl DocumentPackage {
    /// Opens a package read-only.
    ///
    /// Filesystem failures are classified (`NotFound`, `PermissionDenied`)
    /// so the dispatcher can short-circuit; a file that opens but is not a
    /// valid ZIP archive is `InvalidPackage`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::from_io(e, path))?;
        let archive = ZipArchive::new(BufReader::new(file))
            .map_err(|e| Error::InvalidPackage(e.to_string()))?;
        debug!(parts = archive.len(), "opened document package");
        Ok(DocumentPackage { archive })
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Reads a named part in full. Absent parts are `PartMissing`, which
    /// checkers report as a finding rather than treating as fatal.
    pub fn read_part(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut part = self.archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => Error::PartMissing(name.to_string()),
            ZipError::Io(io_err) => Error::Io(io_err),
            other => Error::InvalidPackage(other.to_string()),
        })?;
        let mut bytes = Vec::with_capacity(part.size() as usize);
        part.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Parses `docProps/core.xml`. A package without the part yields the
    /// all-`Absent` default, which is exactly the state the scrape
    /// detector reports on; the part's raw presence is still observable
    /// through [`DocumentPackage::has_part`].
    pub fn core_properties(&mut self) -> Result<crate::types::CoreProperties> {
        match self.read_part(CORE_PROPS_PART) {
            Ok(bytes) => parse_core_properties(&bytes),
            Err(Error::PartMissing(_)) => Ok(crate::types::CoreProperties::default()),
            Err(e) => Err(e),
        }
    }

    /// Parses `docProps/app.xml`. Part absence is surfaced to the caller,
    /// which reports it as its own condition.
    pub fn app_properties(&mut self) -> Result<crate::types::AppProperties> {
        let bytes = self.read_part(APP_PROPS_PART)?;
        parse_app_properties(&bytes)
    }
}

/// True when an element name resolves into the given namespace URI.
pub(crate) fn element_in<R>(reader: &NsReader<R>, name: QName<'_>, ns: &[u8]) -> bool {
    matches!(
        reader.resolve_element(name).0,
        ResolveResult::Bound(Namespace(uri)) if uri == ns
    )
}

/// Unescaped value of the attribute `(ns, local)` on an element, if present.
pub(crate) fn ns_attr<R>(
    reader: &NsReader<R>,
    e: &BytesStart<'_>,
    ns: &[u8],
    local: &[u8],
) -> Option<String> {
    for attr in e.attributes().with_checks(false).flatten() {
        let (resolved, attr_local) = reader.resolve_attribute(attr.key);
        if attr_local.as_ref() != local {
            continue;
        }
        if let ResolveResult::Bound(Namespace(uri)) = resolved {
            if uri == ns {
                return attr.unescape_value().ok().map(|v| v.into_owned());
            }
        }
    }
    None
}

/// Reads the text content of the element whose `Start` event was just
/// consumed, concatenating child text nodes until the matching end tag.
pub(crate) fn read_element_text<R: BufRead>(
    reader: &mut NsReader<R>,
    buf: &mut Vec<u8>,
) -> Result<String> {
    let mut text = String::new();
    let mut depth = 0usize;
    loop {
        buf.clear();
        match reader.read_event_into(buf)? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_text_concatenates_nested_runs() {
        let xml = b"<root><a>one <b>two</b> three</a></root>";
        let mut reader = NsReader::from_reader(&xml[..]);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) if e.local_name().as_ref() == b"a" => {
                    let mut inner = Vec::new();
                    let text = read_element_text(&mut reader, &mut inner).unwrap();
                    assert_eq!(text, "one two three");
                    return;
                }
                Event::Eof => panic!("element not found"),
                _ => {}
            }
        }
    }

    #[test]
    fn ns_attr_matches_by_namespace_not_prefix() {
        let xml = br#"<d xmlns:x="urn:one" xmlns:y="urn:two" x:val="first" y:val="second"/>"#;
        let mut reader = NsReader::from_reader(&xml[..]);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Empty(e) => {
                    assert_eq!(
                        ns_attr(&reader, &e, b"urn:two", b"val").as_deref(),
                        Some("second")
                    );
                    assert_eq!(ns_attr(&reader, &e, b"urn:missing", b"val"), None);
                    return;
                }
                Event::Eof => panic!("element not found"),
                _ => {}
            }
        }
    }
}
