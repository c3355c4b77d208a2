/// Open Packaging Conventions (OPC) implementation.
///
/// This module provides the package layer underneath Word documents:
///
/// - Package structure (parts, relationships)
/// - Content type lookup
/// - ZIP-based physical packaging
///
/// Parts are held as raw blobs so that anything the caller does not rewrite is
/// saved back byte for byte.

pub mod constants;
pub mod content_types;
pub mod error;
pub mod package;
pub mod packuri;
pub mod phys_pkg;
pub mod rel;

// Re-export commonly used types
pub use content_types::ContentTypeMap;
pub use package::{OpcPackage, Part};
pub use packuri::PackURI;
pub use rel::{Relationship, Relationships};
