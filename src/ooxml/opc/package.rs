/// Objects that implement reading and writing OPC packages.
///
/// This module provides the main OpcPackage type, which represents an Open Packaging
/// Convention package in memory. Parts are kept as raw blobs in archive order; callers
/// replace the blobs they modify and the package writes every other member back
/// unchanged.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::content_types::ContentTypeMap;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::{PhysPkgReader, PhysPkgWriter};
use crate::ooxml::opc::rel::Relationships;
use std::io::{Read, Seek};
use std::path::Path;

/// A package member: a part, a relationships part or `[Content_Types].xml`.
#[derive(Debug, Clone)]
pub struct Part {
    /// ZIP member name exactly as found in the archive
    membername: String,
    partname: PackURI,
    blob: Vec<u8>,
}

impl Part {
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }
}

/// Main API class for working with OPC packages.
///
/// OpcPackage represents an Open Packaging Convention package in memory,
/// providing access to parts, relationships, and package-level operations.
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    content_types: ContentTypeMap,

    /// All members in archive order
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Open an OPC package from a file.
    ///
    /// # Example
    /// ```no_run
    /// use report_formatter::ooxml::opc::OpcPackage;
    ///
    /// let pkg = OpcPackage::open("document.docx").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::open(path)?)
    }

    /// Load an OPC package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::new(reader)?)
    }

    /// Load an OPC package from an in-memory archive.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_phys_reader(PhysPkgReader::from_bytes(data)?)
    }

    fn from_phys_reader(phys_reader: PhysPkgReader) -> Result<Self> {
        let content_types_uri =
            PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        let content_types = ContentTypeMap::from_xml(phys_reader.blob_for(&content_types_uri)?)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OpcError::InvalidPackUri)?;
        let rels = match phys_reader.rels_xml_for(&package_uri)? {
            Some(xml) => Relationships::from_xml(PACKAGE_URI, xml)?,
            None => Relationships::new(PACKAGE_URI.to_string()),
        };

        let parts = phys_reader
            .into_members()
            .into_iter()
            .map(|(membername, blob)| Part {
                partname: PackURI::from_membername(&membername),
                membername,
                blob,
            })
            .collect();

        Ok(Self {
            rels,
            content_types,
            parts,
        })
    }

    /// Get the package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get the partname of the main document part.
    ///
    /// For Word documents, this is usually `/word/document.xml`.
    pub fn main_document_partname(&self) -> Result<PackURI> {
        self.rels
            .part_with_reltype(relationship_type::OFFICE_DOCUMENT)?
            .target_partname()
    }

    /// Get the content type of a part.
    pub fn content_type(&self, partname: &PackURI) -> Result<&str> {
        self.content_types.get(partname)
    }

    fn find(&self, partname: &PackURI) -> Option<usize> {
        self.parts
            .iter()
            .position(|part| part.partname.as_str().eq_ignore_ascii_case(partname.as_str()))
    }

    /// Get a part by its partname.
    pub fn part(&self, partname: &PackURI) -> Result<&Part> {
        self.find(partname)
            .map(|index| &self.parts[index])
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Get the relationships of a part (empty if it has no `.rels` part).
    pub fn part_rels(&self, partname: &PackURI) -> Result<Relationships> {
        let rels_uri = partname.rels_uri().map_err(OpcError::InvalidPackUri)?;
        match self.find(&rels_uri) {
            Some(index) => Relationships::from_xml(partname.base_uri(), &self.parts[index].blob),
            None => Ok(Relationships::new(partname.base_uri().to_string())),
        }
    }

    /// Replace the content of an existing part.
    pub fn set_part_blob(&mut self, partname: &PackURI, blob: Vec<u8>) -> Result<()> {
        let index = self
            .find(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))?;
        self.parts[index].blob = blob;
        Ok(())
    }

    /// Iterate over every member in archive order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Serialize the package to ZIP bytes, preserving member order and names.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = PhysPkgWriter::new();
        for part in &self.parts {
            writer.write(&part.membername, &part.blob)?;
        }
        writer.finish()
    }

    /// Write the package to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::testing::DocxBuilder;
    use crate::ooxml::opc::constants::content_type as ct;

    #[test]
    fn test_open_and_navigate() {
        let bytes = DocxBuilder::new().paragraph("Normal", "Hello").build();
        let pkg = OpcPackage::from_bytes(bytes).unwrap();

        let main = pkg.main_document_partname().unwrap();
        assert_eq!(main.as_str(), "/word/document.xml");
        assert_eq!(pkg.content_type(&main).unwrap(), ct::WML_DOCUMENT_MAIN);

        let rels = pkg.part_rels(&main).unwrap();
        let styles = rels
            .part_with_reltype(relationship_type::STYLES)
            .unwrap()
            .target_partname()
            .unwrap();
        assert_eq!(styles.as_str(), "/word/styles.xml");
        assert!(pkg.part(&styles).is_ok());
    }

    #[test]
    fn test_untouched_parts_round_trip() {
        let bytes = DocxBuilder::new().paragraph("Normal", "Hello").build();
        let mut pkg = OpcPackage::from_bytes(bytes).unwrap();
        let main = pkg.main_document_partname().unwrap();
        pkg.set_part_blob(&main, b"<w:document/>".to_vec()).unwrap();

        let reopened = OpcPackage::from_bytes(pkg.to_bytes().unwrap()).unwrap();
        let before: Vec<_> = pkg.iter_parts().map(|p| p.partname().clone()).collect();
        let after: Vec<_> = reopened.iter_parts().map(|p| p.partname().clone()).collect();
        assert_eq!(before, after);

        for part in pkg.iter_parts() {
            assert_eq!(reopened.part(part.partname()).unwrap().blob(), part.blob());
        }
    }

    #[test]
    fn test_missing_content_types() {
        let mut writer = PhysPkgWriter::new();
        writer.write("word/document.xml", b"<w:document/>").unwrap();
        let result = OpcPackage::from_bytes(writer.finish().unwrap());
        assert!(matches!(result, Err(OpcError::PartNotFound(_))));
    }
}
