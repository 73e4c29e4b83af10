//! Shared fixture builders for the integration suites
//!
//! Synthesizes minimal `.docx` packages (ZIP + XML parts) and PDFs on
//! disk, so the tests exercise the same filesystem entry points the CLI
//! uses.

// Each integration binary compiles its own copy; not every binary uses
// every helper.
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Builds a `.docx` package from named parts. Parts set to `None` are
/// left out of the archive entirely.
#[derive(Default)]
pub struct DocxBuilder {
    core_xml: Option<String>,
    app_xml: Option<String>,
    document_xml: Option<String>,
    settings_xml: Option<String>,
    comments_xml: Option<String>,
    styles_xml: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        DocxBuilder {
            document_xml: Some(document_xml("<w:p><w:r><w:t>Hello world</w:t></w:r></w:p>")),
            ..DocxBuilder::default()
        }
    }

    pub fn core_xml(mut self, xml: impl Into<String>) -> Self {
        self.core_xml = Some(xml.into());
        self
    }

    pub fn app_xml(mut self, xml: impl Into<String>) -> Self {
        self.app_xml = Some(xml.into());
        self
    }

    pub fn document_xml(mut self, xml: impl Into<String>) -> Self {
        self.document_xml = Some(xml.into());
        self
    }

    pub fn settings_xml(mut self, xml: impl Into<String>) -> Self {
        self.settings_xml = Some(xml.into());
        self
    }

    pub fn comments_xml(mut self, xml: impl Into<String>) -> Self {
        self.comments_xml = Some(xml.into());
        self
    }

    pub fn styles_xml(mut self, xml: impl Into<String>) -> Self {
        self.styles_xml = Some(xml.into());
        self
    }

    pub fn write_to(&self, path: &Path) {
        let file = File::create(path).expect("create fixture file");
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        let parts = [
            ("docProps/core.xml", &self.core_xml),
            ("docProps/app.xml", &self.app_xml),
            ("word/document.xml", &self.document_xml),
            ("word/settings.xml", &self.settings_xml),
            ("word/comments.xml", &self.comments_xml),
            ("word/styles.xml", &self.styles_xml),
        ];
        for (name, content) in parts {
            if let Some(content) = content {
                zip.start_file(name, options).expect("start zip entry");
                zip.write_all(content.as_bytes()).expect("write zip entry");
            }
        }
        zip.finish().expect("finish zip archive");
    }
}

/// Core properties with the standard namespace bindings; `fields` is the
/// raw inner element XML.
pub fn core_xml(fields: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties
    xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">{fields}</cp:coreProperties>"#
    )
}

pub fn app_xml(application: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
    <Application>{application}</Application>
    <AppVersion>16.0000</AppVersion>
</Properties>"#
    )
}

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#
    )
}

pub fn settings_xml(rsids: &[&str]) -> String {
    let entries: String = rsids
        .iter()
        .map(|rsid| format!(r#"<w:rsid w:val="{rsid}"/>"#))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="{W_NS}"><w:rsids><w:rsidRoot w:val="{root}"/>{entries}</w:rsids></w:settings>"#,
        root = rsids.first().copied().unwrap_or("00000000"),
    )
}

/// Writes a one-page PDF with an optional `Info` dictionary. The page
/// carries an empty content stream, so content analysis sees a page but
/// no extractable text.
pub fn write_pdf(path: &Path, info: Option<lopdf::Dictionary>) {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(info) = info {
        let info_id = doc.add_object(Object::Dictionary(info));
        doc.trailer.set("Info", Object::Reference(info_id));
    }

    doc.save(path).expect("save fixture pdf");
}
