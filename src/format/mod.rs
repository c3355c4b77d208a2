//! Report formatting.
//!
//! [`Formatter`] applies one set of [`FormattingOptions`] to a Word document:
//!
//! - level 1 headings: bold, upper case, 16pt, page break before
//! - level 2 headings: bold, small caps, 13pt
//! - other headings: left as they are
//! - body paragraphs: configured font and size, justification, line spacing
//!   and 6pt spacing, kept on one page
//!
//! and can put a table-of-contents field in front of the first paragraph.
//! Results are written next to the source as `<stem>_Formatted.<ext>`.

pub mod classify;
pub mod config;
pub mod error;
pub mod formatter;
pub mod options;
pub mod refresh;

pub use classify::ParagraphKind;
pub use config::FormatterConfig;
pub use error::{ConfigError, FormatError, ParseLineSpacingError, RefreshError, Result};
pub use formatter::{
    FormatOutcome, Formatter, KindCounts, TocStatus, apply_formatting, output_path_for,
};
pub use options::{
    FONT_PRESETS, FormatMode, FormattingOptions, LineSpacingChoice, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
pub use refresh::{CommandRefresher, NoopRefresher, TocRefresher};
