/// Document - the main document body of a Word file.
use crate::common::XmlElement;
use crate::ooxml::docx::package::Package;
use crate::ooxml::docx::paragraph::{Paragraph, ParagraphMut};
use crate::ooxml::docx::styles::Styles;
use crate::ooxml::error::{OoxmlError, Result};
use std::io::{Read, Seek};
use std::path::Path;

/// A Word document loaded for editing.
///
/// The main document part is held as a mutable element tree; every other part
/// stays in the package as raw bytes and is saved back unchanged.
///
/// # Examples
///
/// ```rust,no_run
/// use report_formatter::ooxml::docx::Document;
///
/// let mut doc = Document::open("report.docx")?;
/// for mut para in doc.paragraphs_mut() {
///     para.set_keep_together(true);
/// }
/// doc.save("report_out.docx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Document {
    package: Package,
    /// Root `w:document` element
    root: XmlElement,
    styles: Styles,
}

impl Document {
    /// Open a .docx file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Package::open(path)?.into_document()
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Package::from_reader(reader)?.into_document()
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Package::from_bytes(data)?.into_document()
    }

    pub(crate) fn from_package(package: Package) -> Result<Self> {
        let root = XmlElement::parse(package.main_document_xml()?)?;
        if root.child("w:body").is_none() {
            return Err(OoxmlError::MissingElement {
                element: "w:body".to_string(),
                part: package.main_partname().to_string(),
            });
        }
        let styles = match package.styles_xml()? {
            Some(xml) => Styles::from_xml(xml)?,
            None => Styles::default(),
        };
        Ok(Self {
            package,
            root,
            styles,
        })
    }

    #[inline]
    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    fn body(&self) -> Option<&XmlElement> {
        self.root.child("w:body")
    }

    /// Number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.body()
            .map_or(0, |body| body.children().filter(|c| c.is("w:p")).count())
    }

    /// Body paragraphs in document order.
    ///
    /// Only direct `w:p` children of `w:body` are returned; paragraphs inside
    /// tables, text boxes and content controls are not.
    pub fn paragraphs(&self) -> Vec<Paragraph<'_>> {
        let Some(body) = self.body() else {
            return Vec::new();
        };
        body.children()
            .filter(|c| c.is("w:p"))
            .map(|p| Paragraph::new(p, self.style_name_of(p)))
            .collect()
    }

    /// Mutable views of the body paragraphs in document order.
    pub fn paragraphs_mut(&mut self) -> Vec<ParagraphMut<'_>> {
        let styles = &self.styles;
        let Some(body) = self.root.child_mut("w:body") else {
            return Vec::new();
        };
        body.children_mut()
            .filter(|c| c.is("w:p"))
            .map(|p| {
                let style_name = Self::resolve_style_name(styles, p);
                ParagraphMut::new(p, style_name)
            })
            .collect()
    }

    fn style_name_of(&self, paragraph: &XmlElement) -> String {
        Self::resolve_style_name(&self.styles, paragraph)
    }

    fn resolve_style_name(styles: &Styles, paragraph: &XmlElement) -> String {
        let style_id = paragraph
            .child("w:pPr")
            .and_then(|ppr| ppr.child("w:pStyle"))
            .and_then(|style| style.attr("w:val"));
        styles.paragraph_style_name(style_id.as_deref())
    }

    /// Insert a new paragraph before the first body paragraph.
    ///
    /// When the body has no paragraph, the new one goes at the end of the
    /// body, ahead of the final `w:sectPr`.
    pub fn insert_paragraph_before_first(
        &mut self,
        text: &str,
        style_id: Option<&str>,
    ) -> Result<ParagraphMut<'_>> {
        let main_partname = self.package.main_partname().to_string();
        let body = self
            .root
            .child_mut("w:body")
            .ok_or_else(|| OoxmlError::MissingElement {
                element: "w:body".to_string(),
                part: main_partname,
            })?;

        let index = body
            .position_of("w:p")
            .or_else(|| body.position_of("w:sectPr"))
            .unwrap_or(body.nodes().len());

        let mut element = XmlElement::new("w:p");
        if let Some(style_id) = style_id {
            element = element.with_child(
                XmlElement::new("w:pPr")
                    .with_child(XmlElement::new("w:pStyle").with_attr("w:val", style_id)),
            );
        }
        body.insert_node(index, element);

        let style_name = self.styles.paragraph_style_name(style_id);
        let paragraph = body
            .children_mut()
            .find(|c| c.is("w:p"))
            .ok_or_else(|| OoxmlError::Xml("inserted paragraph not found".to_string()))?;
        let mut paragraph = ParagraphMut::new(paragraph, style_name);
        if !text.is_empty() {
            paragraph.add_run(text);
        }
        Ok(paragraph)
    }

    /// Serialize the main document part.
    pub fn to_xml_bytes(&self) -> Vec<u8> {
        self.root.to_xml_bytes()
    }

    /// Serialize the whole package.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.sync_main_part()?;
        self.package.to_bytes()
    }

    /// Write the document to `path`.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.sync_main_part()?;
        self.package.save(path)
    }

    fn sync_main_part(&mut self) -> Result<()> {
        let xml = self.root.to_xml_bytes();
        self.package.set_main_document_xml(xml)
    }
}
