//! `docProps/core.xml` parsing
//!
//! Core properties follow the Dublin Core layout: `dc:` elements for the
//! free-text descriptors, `cp:` for package-specific fields, `dcterms:`
//! for the typed timestamps. Elements are matched by (namespace, local
//! name); prefixes in the document are irrelevant.

use quick_xml::events::Event;
use quick_xml::NsReader;

use crate::error::Result;
use crate::types::{CoreProperties, FieldValue, TimestampValue};

use super::{element_in, read_element_text, CP_NS, DCTERMS_NS, DC_NS};

pub fn parse_core_properties(bytes: &[u8]) -> Result<CoreProperties> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut text_buf = Vec::new();
    let mut props = CoreProperties::default();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            // Only consume the text of recognized field elements; anything
            // else (the root included) is descended into normally.
            Event::Start(e) => {
                let Some(field) = classify(&reader, &e) else { continue };
                let text = read_element_text(&mut reader, &mut text_buf)?;
                assign_field(&mut props, field, &text);
            }
            // Self-closing elements carry no text: present but blank.
            Event::Empty(e) => {
                if let Some(field) = classify(&reader, &e) {
                    assign_field(&mut props, field, "");
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(props)
}

#[derive(Clone, Copy)]
enum Field {
    Author,
    LastModifiedBy,
    Comments,
    Title,
    Subject,
    Keywords,
    Category,
    Revision,
    Created,
    Modified,
}

fn classify<R>(
    reader: &quick_xml::NsReader<R>,
    e: &quick_xml::events::BytesStart<'_>,
) -> Option<Field> {
    let dc = element_in(reader, e.name(), DC_NS);
    let cp = element_in(reader, e.name(), CP_NS);
    let dcterms = element_in(reader, e.name(), DCTERMS_NS);
    match e.local_name().as_ref() {
        b"creator" if dc => Some(Field::Author),
        b"lastModifiedBy" if cp => Some(Field::LastModifiedBy),
        b"description" if dc => Some(Field::Comments),
        b"title" if dc => Some(Field::Title),
        b"subject" if dc => Some(Field::Subject),
        b"keywords" if cp => Some(Field::Keywords),
        b"category" if cp => Some(Field::Category),
        b"revision" if cp => Some(Field::Revision),
        b"created" if dcterms => Some(Field::Created),
        b"modified" if dcterms => Some(Field::Modified),
        _ => None,
    }
}

fn assign_field(props: &mut CoreProperties, field: Field, text: &str) {
    match field {
        Field::Author => props.author = FieldValue::from_text(text),
        Field::LastModifiedBy => props.last_modified_by = FieldValue::from_text(text),
        Field::Comments => props.comments = FieldValue::from_text(text),
        Field::Title => props.title = FieldValue::from_text(text),
        Field::Subject => props.subject = FieldValue::from_text(text),
        Field::Keywords => props.keywords = FieldValue::from_text(text),
        Field::Category => props.category = FieldValue::from_text(text),
        Field::Revision => props.revision = FieldValue::from_text(text),
        Field::Created => props.created = TimestampValue::from_w3cdtf(text),
        Field::Modified => props.modified = TimestampValue::from_w3cdtf(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
                   xmlns:dc="http://purl.org/dc/elements/1.1/"
                   xmlns:dcterms="http://purl.org/dc/terms/"
                   xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>Quarterly Report</dc:title>
    <dc:subject>Finance</dc:subject>
    <dc:creator>ChatGPT</dc:creator>
    <cp:keywords>numbers, money</cp:keywords>
    <dc:description/>
    <cp:lastModifiedBy>Jordan</cp:lastModifiedBy>
    <cp:revision>7</cp:revision>
    <dcterms:created xsi:type="dcterms:W3CDTF">2024-01-01T00:00:00Z</dcterms:created>
    <dcterms:modified xsi:type="dcterms:W3CDTF">2024-01-01T01:00:00Z</dcterms:modified>
</cp:coreProperties>"#;

    #[test]
    fn parses_the_standard_field_set() {
        let props = parse_core_properties(SAMPLE).unwrap();
        assert_eq!(props.author, FieldValue::Value("ChatGPT".into()));
        assert_eq!(props.last_modified_by, FieldValue::Value("Jordan".into()));
        assert_eq!(props.title, FieldValue::Value("Quarterly Report".into()));
        assert_eq!(props.revision, FieldValue::Value("7".into()));
        // Self-closing description element: present but blank.
        assert_eq!(props.comments, FieldValue::Blank);
        // Category never appears: absent.
        assert_eq!(props.category, FieldValue::Absent);
        let created = props.created.as_datetime().unwrap();
        let modified = props.modified.as_datetime().unwrap();
        assert_eq!((modified - created).num_seconds(), 3600);
    }

    #[test]
    fn unknown_prefixes_still_resolve_by_namespace() {
        let xml = br#"<props xmlns:weird="http://purl.org/dc/elements/1.1/">
            <weird:creator>Word User</weird:creator>
        </props>"#;
        let props = parse_core_properties(xml).unwrap();
        assert_eq!(props.author, FieldValue::Value("Word User".into()));
    }

    #[test]
    fn elements_outside_the_schema_namespaces_are_ignored() {
        let xml = br#"<props xmlns:other="urn:not-dublin-core">
            <other:creator>Impostor</other:creator>
        </props>"#;
        let props = parse_core_properties(xml).unwrap();
        assert_eq!(props.author, FieldValue::Absent);
    }
}
