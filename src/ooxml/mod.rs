//! Office Open XML (OOXML) support for Word documents.
//!
//! The implementation is based on the Open Packaging Conventions (OPC) and
//! follows the structure of the python-docx library, adapted for Rust.
//!
//! # Architecture
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): Low-level package handling (ZIP, parts, relationships)
//! 2. **Word Layer** (`docx`): Document body, paragraphs, runs, styles and fields
//!
//! # Example: Working with Word Documents
//!
//! ```rust,no_run
//! use report_formatter::ooxml::docx::Document;
//!
//! let doc = Document::open("document.docx")?;
//! println!("Document contains {} paragraphs", doc.paragraph_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod error;
pub mod opc;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

// Re-export error types
pub use error::{OoxmlError, Result};
