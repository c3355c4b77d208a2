//! In-memory .docx fixtures for tests.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace as ns, relationship_type as rt};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::path::{Path, PathBuf};

/// Builds a minimal but complete WordprocessingML package.
///
/// The style table defines `Normal` (default), `Heading1`..`Heading3`,
/// `Title` and `TOCHeading` with Word's built-in UI names.
pub(crate) struct DocxBuilder {
    body: String,
    raw_document: Option<String>,
    main_content_type: String,
    with_styles: bool,
    with_package_rels: bool,
}

impl DocxBuilder {
    pub(crate) fn new() -> Self {
        Self {
            body: String::new(),
            raw_document: None,
            main_content_type: ct::WML_DOCUMENT_MAIN.to_string(),
            with_styles: true,
            with_package_rels: true,
        }
    }

    fn push_paragraph(&mut self, style_id: Option<&str>, runs: &[&str]) {
        self.body.push_str("<w:p>");
        if let Some(style_id) = style_id {
            self.body
                .push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, style_id));
        }
        for text in runs {
            self.body.push_str(&format!(
                r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
                escape_xml(text)
            ));
        }
        self.body.push_str("</w:p>");
    }

    /// A paragraph with one run.
    pub(crate) fn paragraph(mut self, style_id: &str, text: &str) -> Self {
        self.push_paragraph(Some(style_id), &[text]);
        self
    }

    /// A paragraph with several runs; `None` leaves out `w:pStyle`.
    pub(crate) fn paragraph_runs(mut self, style_id: Option<&str>, runs: &[&str]) -> Self {
        self.push_paragraph(style_id, runs);
        self
    }

    /// A one-cell table holding a single paragraph.
    pub(crate) fn table_paragraph(mut self, text: &str) -> Self {
        self.body.push_str(&format!(
            "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
            escape_xml(text)
        ));
        self
    }

    pub(crate) fn without_styles(mut self) -> Self {
        self.with_styles = false;
        self
    }

    pub(crate) fn without_package_rels(mut self) -> Self {
        self.with_package_rels = false;
        self
    }

    pub(crate) fn main_content_type(mut self, content_type: &str) -> Self {
        self.main_content_type = content_type.to_string();
        self
    }

    /// Use `xml` verbatim as `word/document.xml`.
    pub(crate) fn raw_document_xml(mut self, xml: &str) -> Self {
        self.raw_document = Some(xml.to_string());
        self
    }

    fn document_xml(&self) -> String {
        if let Some(raw) = &self.raw_document {
            return raw.clone();
        }
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr><w:pgSz w:w="12240" w:h="15840"/></w:sectPr></w:body></w:document>"#,
            ns::WML_MAIN,
            self.body
        )
    }

    fn styles_xml() -> String {
        let styles = [
            ("Normal", "Normal", true),
            ("Heading1", "heading 1", false),
            ("Heading2", "heading 2", false),
            ("Heading3", "heading 3", false),
            ("Title", "Title", false),
            ("TOCHeading", "TOC Heading", false),
        ];
        let mut xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{}">"#,
            ns::WML_MAIN
        );
        for (id, name, is_default) in styles {
            let default = if is_default { r#" w:default="1""# } else { "" };
            xml.push_str(&format!(
                r#"<w:style w:type="paragraph"{} w:styleId="{}"><w:name w:val="{}"/></w:style>"#,
                default, id, name
            ));
        }
        xml.push_str("</w:styles>");
        xml
    }

    fn content_types_xml(&self) -> String {
        let mut xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="{}"><Default Extension="rels" ContentType="{}"/><Default Extension="xml" ContentType="{}"/><Override PartName="/word/document.xml" ContentType="{}"/><Override PartName="/docProps/core.xml" ContentType="{}"/>"#,
            ns::OPC_CONTENT_TYPES,
            ct::OPC_RELATIONSHIPS,
            ct::XML,
            self.main_content_type,
            ct::OPC_CORE_PROPERTIES
        );
        if self.with_styles {
            xml.push_str(&format!(
                r#"<Override PartName="/word/styles.xml" ContentType="{}"/>"#,
                ct::WML_STYLES
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    fn package_rels_xml() -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}"><Relationship Id="rId1" Type="{}" Target="word/document.xml"/><Relationship Id="rId2" Type="{}" Target="docProps/core.xml"/></Relationships>"#,
            ns::OPC_RELATIONSHIPS,
            rt::OFFICE_DOCUMENT,
            rt::CORE_PROPERTIES
        )
    }

    fn document_rels_xml() -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}"><Relationship Id="rId1" Type="{}" Target="styles.xml"/></Relationships>"#,
            ns::OPC_RELATIONSHIPS,
            rt::STYLES
        )
    }

    /// Build the package bytes.
    pub(crate) fn build(self) -> Vec<u8> {
        let mut writer = PhysPkgWriter::new();
        writer
            .write("[Content_Types].xml", self.content_types_xml().as_bytes())
            .unwrap();
        if self.with_package_rels {
            writer.write("_rels/.rels", Self::package_rels_xml().as_bytes()).unwrap();
        }
        writer
            .write("word/document.xml", self.document_xml().as_bytes())
            .unwrap();
        if self.with_styles {
            writer
                .write("word/_rels/document.xml.rels", Self::document_rels_xml().as_bytes())
                .unwrap();
            writer.write("word/styles.xml", Self::styles_xml().as_bytes()).unwrap();
        }
        writer
            .write("docProps/core.xml", br#"<cp:coreProperties xmlns:cp="urn:core"/>"#)
            .unwrap();
        writer.finish().unwrap()
    }

    /// Build and write the package to `dir/name`.
    pub(crate) fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}
