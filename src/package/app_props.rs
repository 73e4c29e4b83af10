//! `docProps/app.xml` parsing
//!
//! The extended-properties part names the application that wrote the
//! package (`Application`, `AppVersion`). Producers that strip metadata
//! often drop this part entirely, so its absence is a condition the app
//! checker reports distinctly from a blank field.

use quick_xml::events::Event;
use quick_xml::NsReader;

use crate::error::Result;
use crate::types::{AppProperties, FieldValue};

use super::{element_in, read_element_text, EP_NS};

pub fn parse_app_properties(bytes: &[u8]) -> Result<AppProperties> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut text_buf = Vec::new();
    let mut props = AppProperties::default();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            // Only consume the text of the two recognized fields; the root
            // and unknown elements are descended into normally.
            Event::Start(e) => {
                let is_application = is_field(&reader, &e, b"Application");
                let is_version = is_field(&reader, &e, b"AppVersion");
                if is_application || is_version {
                    let text = read_element_text(&mut reader, &mut text_buf)?;
                    if is_application {
                        props.application = FieldValue::from_text(text);
                    } else {
                        props.app_version = FieldValue::from_text(text);
                    }
                }
            }
            Event::Empty(e) => {
                if is_field(&reader, &e, b"Application") {
                    props.application = FieldValue::Blank;
                } else if is_field(&reader, &e, b"AppVersion") {
                    props.app_version = FieldValue::Blank;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(props)
}

fn is_field<R>(
    reader: &quick_xml::NsReader<R>,
    e: &quick_xml::events::BytesStart<'_>,
    local: &[u8],
) -> bool {
    e.local_name().as_ref() == local && element_in(reader, e.name(), EP_NS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_application_and_version() {
        let xml = br#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
            <Application>Microsoft Office Word</Application>
            <AppVersion>16.0000</AppVersion>
        </Properties>"#;
        let props = parse_app_properties(xml).unwrap();
        assert_eq!(
            props.application,
            FieldValue::Value("Microsoft Office Word".into())
        );
        assert_eq!(props.app_version, FieldValue::Value("16.0000".into()));
    }

    #[test]
    fn blank_application_element_is_blank_not_absent() {
        let xml = br#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
            <Application/>
        </Properties>"#;
        let props = parse_app_properties(xml).unwrap();
        assert_eq!(props.application, FieldValue::Blank);
        assert_eq!(props.app_version, FieldValue::Absent);
    }
}
