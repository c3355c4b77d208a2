//! User-selectable formatting options.

use crate::format::error::{FormatError, ParseLineSpacingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Smallest accepted body font size in points.
pub const MIN_FONT_SIZE: u32 = 10;
/// Largest accepted body font size in points.
pub const MAX_FONT_SIZE: u32 = 16;
/// Body fonts offered as presets.
pub const FONT_PRESETS: &[&str] = &["Calibri", "Arial", "Times New Roman"];

/// The four line spacing presets for body paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "LineSpacingValue", into = "String")]
pub enum LineSpacingChoice {
    #[default]
    Single,
    OnePointOneFive,
    OnePointFive,
    Double,
}

impl LineSpacingChoice {
    pub const ALL: [Self; 4] = [Self::Single, Self::OnePointOneFive, Self::OnePointFive, Self::Double];

    /// Line height as a multiple of single spacing.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Single => 1.0,
            Self::OnePointOneFive => 1.15,
            Self::OnePointFive => 1.5,
            Self::Double => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::OnePointOneFive => "1.15",
            Self::OnePointFive => "1.5",
            Self::Double => "Double",
        }
    }
}

impl fmt::Display for LineSpacingChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineSpacingChoice {
    type Err = ParseLineSpacingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" | "1.0" => Ok(Self::Single),
            "1.15" => Ok(Self::OnePointOneFive),
            "1.5" => Ok(Self::OnePointFive),
            "double" | "2" | "2.0" => Ok(Self::Double),
            _ => Err(ParseLineSpacingError(s.to_string())),
        }
    }
}

/// YAML may spell a preset as a name or as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum LineSpacingValue {
    Name(String),
    Number(f64),
}

impl TryFrom<LineSpacingValue> for LineSpacingChoice {
    type Error = ParseLineSpacingError;

    fn try_from(value: LineSpacingValue) -> std::result::Result<Self, Self::Error> {
        match value {
            LineSpacingValue::Name(name) => name.parse(),
            LineSpacingValue::Number(number) => Self::ALL
                .into_iter()
                .find(|choice| (choice.multiplier() - number).abs() < 1e-9)
                .ok_or_else(|| ParseLineSpacingError(number.to_string())),
        }
    }
}

impl From<LineSpacingChoice> for String {
    fn from(choice: LineSpacingChoice) -> Self {
        choice.as_str().to_string()
    }
}

/// Formatting toggles for one formatting pass.
///
/// Missing fields in a configuration file take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormattingOptions {
    /// Bold (and upper-case or small-caps) level 1 and 2 headings
    pub bold_headings: bool,
    pub page_break_before_top_headings: bool,
    /// Body font
    pub font_name: String,
    /// Body font size in points
    pub font_size: u32,
    /// Justify body paragraphs instead of aligning them left
    pub justify_paragraphs: bool,
    pub line_spacing: LineSpacingChoice,
    /// Insert a table of contents at the top of the document
    pub insert_toc: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            bold_headings: true,
            page_break_before_top_headings: true,
            font_name: FONT_PRESETS[0].to_string(),
            font_size: 11,
            justify_paragraphs: true,
            line_spacing: LineSpacingChoice::Single,
            insert_toc: true,
        }
    }
}

impl FormattingOptions {
    /// Check the values a free-form source (file, command line) can get wrong.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(FormatError::InvalidOptions(format!(
                "font size {} is outside {}..={}",
                self.font_size, MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        if self.font_name.trim().is_empty() {
            return Err(FormatError::InvalidOptions("font name is empty".to_string()));
        }
        Ok(())
    }
}

/// How a document is to be formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatMode {
    /// Apply the given options
    Options(FormattingOptions),
    /// Copy formatting from a template document (not implemented)
    Template { template: Option<PathBuf> },
}

impl Default for FormatMode {
    fn default() -> Self {
        Self::Options(FormattingOptions::default())
    }
}
