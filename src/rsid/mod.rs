//! RSID (Revision Save ID) analysis
//!
//! Word mints an 8-hex-digit RSID for every save session and stamps it on
//! the elements created in that session; the full session history is also
//! declared in `word/settings.xml`. A populated RSID history is a
//! distinguishing feature of genuine Word authorship, so both halves are
//! reported: the master count from settings and the per-session element
//! tallies from the document body. Each half runs regardless of the
//! other's outcome.

use lazy_static::lazy_static;
use quick_xml::events::Event;
use quick_xml::NsReader;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::package::{element_in, ns_attr, DocumentPackage, DOCUMENT_PART, SETTINGS_PART, W_NS};
use crate::types::{Category, Finding, RsidTable};

lazy_static! {
    /// The session token shape Word writes: exactly eight hex digits.
    static ref RSID_SHAPE: Regex = Regex::new(r"^[0-9A-Fa-f]{8}$").unwrap();
}

/// Analyzes the revision-session identifiers of one package.
pub fn analyze_rsids(package: &mut DocumentPackage) -> Vec<Finding> {
    let mut findings = vec![Finding::section("--- RSID (Revision Save ID) Analysis ---")];

    match package.read_part(SETTINGS_PART) {
        Ok(bytes) => match count_settings_sessions(&bytes) {
            Ok(Some(count)) => findings.push(Finding::tagged(
                Category::Rsid,
                format!("Settings declare {count} revision session(s)."),
            )),
            Ok(None) => findings.push(Finding::placeholder(
                Some(Category::Rsid),
                "No revision session list declared in settings.xml.",
            )),
            Err(e) => findings.push(Finding::note(format!(
                "An unexpected error occurred during RSID scan: {e}"
            ))),
        },
        Err(Error::PartMissing(_)) => findings.push(Finding::placeholder(
            Some(Category::Rsid),
            "No word/settings.xml part present; master revision-session list unavailable.",
        )),
        Err(e) => findings.push(Finding::note(format!(
            "An unexpected error occurred during RSID scan: {e}"
        ))),
    }

    match package.read_part(DOCUMENT_PART) {
        Ok(bytes) => match scan_body_sessions(&bytes) {
            Ok(table) => findings.extend(report_body_sessions(&table)),
            Err(e) => findings.push(Finding::note(format!(
                "An unexpected error occurred during RSID scan: {e}"
            ))),
        },
        Err(Error::PartMissing(_)) => {
            findings.push(Finding::note(
                "Could not find 'word/document.xml' in the .docx file.",
            ));
        }
        Err(e) => findings.push(Finding::note(format!(
            "An unexpected error occurred during RSID scan: {e}"
        ))),
    }

    findings
}

/// Counts `w:rsid` entries in the settings master list, excluding the
/// `w:rsidRoot` marker. `None` when the `w:rsids` block is absent.
fn count_settings_sessions(bytes: &[u8]) -> Result<Option<usize>> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut list_seen = false;
    let mut count = 0usize;

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => {
                if !element_in(&reader, e.name(), W_NS) {
                    continue;
                }
                match e.local_name().as_ref() {
                    b"rsids" => list_seen = true,
                    b"rsid" => count += 1,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(if list_seen { Some(count) } else { None })
}

/// Tallies, per distinct RSID, how many body elements were created in
/// that session (the `w:rsidR` attribute), in first-seen order.
fn scan_body_sessions(bytes: &[u8]) -> Result<RsidTable> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut table = RsidTable::default();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => {
                if let Some(rsid) = ns_attr(&reader, &e, W_NS, b"rsidR") {
                    table.record(&rsid);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(sessions = table.distinct_sessions(), "body RSID scan complete");
    Ok(table)
}

fn report_body_sessions(table: &RsidTable) -> Vec<Finding> {
    if table.is_empty() {
        return vec![Finding::placeholder(
            Some(Category::Rsid),
            "No RSID tags found in document.xml.",
        )];
    }

    let mut findings = vec![Finding::tagged(
        Category::Rsid,
        format!(
            "{} distinct revision session(s) found in document body.",
            table.distinct_sessions()
        ),
    )];
    for (rsid, count) in table.iter() {
        findings.push(Finding::tagged(
            Category::Rsid,
            format!("Session RSID '{rsid}': {count} item(s) created."),
        ));
    }

    let malformed: Vec<&str> = table
        .iter()
        .map(|(rsid, _)| rsid)
        .filter(|rsid| !RSID_SHAPE.is_match(rsid))
        .collect();
    if !malformed.is_empty() {
        findings.push(Finding::tagged(
            Category::Rsid,
            format!(
                "{} session value(s) do not match the 8-hex-digit RSID shape ({}).",
                malformed.len(),
                malformed.join(", ")
            ),
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    #[test]
    fn settings_session_count_excludes_rsid_root() {
        let xml = format!(
            r#"<w:settings xmlns:w="{W}">
                 <w:rsids>
                   <w:rsidRoot w:val="00AB12CD"/>
                   <w:rsid w:val="00AB12CD"/>
                   <w:rsid w:val="00EF34AB"/>
                   <w:rsid w:val="00CD56EF"/>
                 </w:rsids>
               </w:settings>"#
        );
        assert_eq!(count_settings_sessions(xml.as_bytes()).unwrap(), Some(3));
    }

    #[test]
    fn settings_without_rsid_list_yield_none() {
        let xml = format!(r#"<w:settings xmlns:w="{W}"><w:zoom w:percent="100"/></w:settings>"#);
        assert_eq!(count_settings_sessions(xml.as_bytes()).unwrap(), None);
    }

    #[test]
    fn body_scan_tallies_by_session_in_first_seen_order() {
        let xml = format!(
            r#"<w:document xmlns:w="{W}"><w:body>
                 <w:p w:rsidR="00AB12CD"><w:r><w:t>one</w:t></w:r></w:p>
                 <w:p w:rsidR="00EF34AB"/>
                 <w:p w:rsidR="00AB12CD"/>
                 <w:p w:rsidR="00AB12CD"/>
               </w:body></w:document>"#
        );
        let table = scan_body_sessions(xml.as_bytes()).unwrap();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("00AB12CD", 3), ("00EF34AB", 1)]);
    }

    #[test]
    fn rsid_attributes_in_other_namespaces_are_ignored() {
        let xml = format!(
            r#"<w:document xmlns:w="{W}" xmlns:x="urn:other"><w:body>
                 <w:p x:rsidR="00AB12CD"/>
               </w:body></w:document>"#
        );
        let table = scan_body_sessions(xml.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn malformed_session_values_still_count_but_are_flagged() {
        let mut table = RsidTable::default();
        table.record("00AB12CD");
        table.record("00EF34GH");
        let findings = report_body_sessions(&table);
        assert!(findings[0].text.starts_with("2 distinct revision session(s)"));
        assert!(findings
            .last()
            .unwrap()
            .text
            .contains("do not match the 8-hex-digit RSID shape (00EF34GH)"));
    }
}
