/// Word (.docx) document support.
///
/// This module opens a .docx package, exposes the body paragraphs and their
/// runs for reading and editing, and saves the result.
///
/// # Architecture
///
/// The module is organized around these key types:
/// - `Package`: The overall .docx file package
/// - `Document`: The main document body, held as an editable element tree
/// - `Paragraph` / `ParagraphMut`: A paragraph with runs and paragraph formatting
/// - `Run` / `RunMut`: A text run with character formatting
/// - `Styles`: The style table, used to resolve paragraph style names
/// - `TableOfContents`: Builder for TOC complex fields
///
/// # Example
///
/// ```rust,no_run
/// use report_formatter::ooxml::docx::Document;
///
/// let doc = Document::open("document.docx")?;
/// for para in doc.paragraphs() {
///     println!("[{}] {}", para.style_name(), para.text());
///     for run in para.runs() {
///         println!("  Run: {} (bold: {:?})", run.text(), run.bold());
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod document;
pub mod field;
pub mod format;
pub mod package;
pub mod paragraph;
pub mod run;
pub mod styles;

#[cfg(test)]
pub(crate) mod testing;

pub use document::Document;
pub use field::{FieldChar, TableOfContents, insert_toc};
pub use format::{Indentation, LineSpacing, ParagraphAlignment};
pub use package::Package;
pub use paragraph::{Paragraph, ParagraphMut};
pub use run::{Run, RunMut};
pub use styles::{Style, StyleType, Styles};
