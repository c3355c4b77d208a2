//! Report Formatter - apply house formatting rules to Word reports
//!
//! This library opens a `.docx` file, rewrites paragraph and run formatting
//! according to a small set of options, optionally inserts a table of
//! contents field, and saves the result beside the original. Parts of the
//! package it does not touch are copied through unchanged.
//!
//! # Example - Formatting a report
//!
//! ```no_run
//! use report_formatter::format::{Formatter, FormattingOptions, LineSpacingChoice};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = FormattingOptions {
//!     font_name: "Times New Roman".to_string(),
//!     line_spacing: LineSpacingChoice::OnePointFive,
//!     ..FormattingOptions::default()
//! };
//! let outcome = Formatter::new(options).format_file("report.docx".as_ref())?;
//! println!("Saved {}", outcome.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inserting a table of contents
//!
//! ```no_run
//! use report_formatter::ooxml::docx::{Document, insert_toc};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::open("report.docx")?;
//! let mut heading = doc.insert_paragraph_before_first("Contents", Some("TOCHeading"))?;
//! insert_toc(&mut heading);
//! doc.save("report_with_toc.docx")?;
//! # Ok(())
//! # }
//! ```

/// Common utilities shared by the OOXML and formatting layers
pub mod common;

/// Formatting rules, options, configuration and TOC refresh
pub mod format;

/// OOXML (Office Open XML) package and WordprocessingML access
///
/// Only what the formatter needs: the OPC container, the main document
/// part and its styles.
pub mod ooxml;

pub use format::{FormatOutcome, Formatter, FormattingOptions};
pub use ooxml::docx::Document;
