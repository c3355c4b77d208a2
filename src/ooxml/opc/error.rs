//! Errors raised while reading or writing the OPC container of a document.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    /// The file is missing or is not a ZIP-based package
    #[error("Not a readable OPC package: {0}")]
    PackageNotFound(String),

    #[error("Invalid part name '{0}'")]
    InvalidPackUri(String),

    /// A relationship points at a member the archive does not contain
    #[error("Package part missing: {0}")]
    PartNotFound(String),

    /// No relationship of the required type (e.g. `officeDocument`)
    #[error("No relationship of type {0}")]
    RelationshipNotFound(String),

    /// Neither an Override nor a Default in `[Content_Types].xml` covers the part
    #[error("No content type declared for {0}")]
    ContentTypeNotFound(String),

    #[error("Malformed relationship: {0}")]
    InvalidRelationship(String),

    /// A package-level XML part (`[Content_Types].xml`, `*.rels`) is malformed
    #[error("Malformed package XML: {0}")]
    XmlError(String),

    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML reader error: {0}")]
    QuickXmlError(#[from] quick_xml::Error),
}

/// Result type for package operations.
pub type Result<T> = std::result::Result<T, OpcError>;
