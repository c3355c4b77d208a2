/// Package implementation for Word documents.
use crate::ooxml::docx::document::Document;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI};
use std::io::{Read, Seek};
use std::path::Path;

/// A Word (.docx) package.
///
/// This is the main entry point for working with Word documents.
/// It wraps an OPC package, checks that its main part is a WordprocessingML
/// document and locates the parts the formatter needs.
///
/// # Examples
///
/// ```rust,no_run
/// use report_formatter::ooxml::docx::Package;
///
/// let pkg = Package::open("report.docx")?;
/// let doc = pkg.into_document()?;
/// println!("{} paragraphs", doc.paragraph_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
    /// Partname of the main document part
    main_partname: PackURI,
}

impl Package {
    /// Open a .docx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    /// Create a .docx package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    /// Create a .docx package from the bytes of a file.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_opc(OpcPackage::from_bytes(data)?)
    }

    fn from_opc(opc: OpcPackage) -> Result<Self> {
        // Verify it's a Word document by checking the main part's content type
        let main_partname = opc
            .main_document_partname()
            .map_err(|e| OoxmlError::PartNotFound(format!("main document part: {}", e)))?;

        let content_type = opc.content_type(&main_partname)?;
        if !ct::WML_MAIN_PARTS.contains(&content_type) {
            return Err(OoxmlError::InvalidContentType {
                expected: ct::WML_DOCUMENT_MAIN.to_string(),
                got: content_type.to_string(),
            });
        }
        opc.part(&main_partname)?;

        Ok(Self { opc, main_partname })
    }

    /// Partname of the main document part, usually `/word/document.xml`.
    #[inline]
    pub fn main_partname(&self) -> &PackURI {
        &self.main_partname
    }

    /// Blob of the main document part.
    pub fn main_document_xml(&self) -> Result<&[u8]> {
        Ok(self.opc.part(&self.main_partname)?.blob())
    }

    /// Blob of the styles part, or `None` if the document has none.
    pub fn styles_xml(&self) -> Result<Option<&[u8]>> {
        let rels = self.opc.part_rels(&self.main_partname)?;
        let partname = match rels.part_with_reltype(rt::STYLES) {
            Ok(rel) => rel.target_partname()?,
            Err(OpcError::RelationshipNotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match self.opc.part(&partname) {
            Ok(part) => Ok(Some(part.blob())),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the main document part.
    pub fn set_main_document_xml(&mut self, xml: Vec<u8>) -> Result<()> {
        self.opc.set_part_blob(&self.main_partname, xml)?;
        Ok(())
    }

    /// Parse the main document and its styles.
    pub fn into_document(self) -> Result<Document> {
        Document::from_package(self)
    }

    /// Get the underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.opc.to_bytes()?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Ok(self.opc.save(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::testing::DocxBuilder;

    #[test]
    fn test_open_package() {
        let pkg = Package::from_bytes(DocxBuilder::new().paragraph("Normal", "Hi").build()).unwrap();
        assert_eq!(pkg.main_partname().as_str(), "/word/document.xml");
        assert!(pkg.styles_xml().unwrap().is_some());
        assert!(!pkg.main_document_xml().unwrap().is_empty());
    }

    #[test]
    fn test_document_without_styles_part() {
        let bytes = DocxBuilder::new().without_styles().paragraph("Normal", "Hi").build();
        let pkg = Package::from_bytes(bytes).unwrap();
        assert!(pkg.styles_xml().unwrap().is_none());
    }

    #[test]
    fn test_rejects_non_word_main_part() {
        let bytes = DocxBuilder::new()
            .main_content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml")
            .build();
        let result = Package::from_bytes(bytes);
        assert!(matches!(result, Err(OoxmlError::InvalidContentType { .. })));
    }

    #[test]
    fn test_rejects_package_without_office_document() {
        let bytes = DocxBuilder::new().without_package_rels().build();
        assert!(matches!(Package::from_bytes(bytes), Err(OoxmlError::PartNotFound(_))));
    }
}
