//! Shared formatting types for DOCX paragraphs.

use crate::common::unit::{line_units_to_multiple, multiple_to_line_units, pt_to_twips, twips_to_pt};

/// Line spacing options for paragraphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpacing {
    /// Multiple of single line spacing (1.0, 1.15, 1.5, 2.0, ...)
    Multiple(f64),
    /// Exact spacing in points
    Exact(f64),
    /// At least spacing in points
    AtLeast(f64),
}

impl LineSpacing {
    /// Decode from the `w:line` and `w:lineRule` attributes of `w:spacing`.
    ///
    /// A missing rule means `auto`.
    pub(crate) fn from_xml(line: &str, rule: Option<&str>) -> Option<Self> {
        let line: i64 = line.trim().parse().ok()?;
        Some(match rule.unwrap_or("auto") {
            "exact" => Self::Exact(twips_to_pt(line)),
            "atLeast" => Self::AtLeast(twips_to_pt(line)),
            _ => Self::Multiple(line_units_to_multiple(line)),
        })
    }

    /// Encode as `(w:line, w:lineRule)` attribute values.
    pub(crate) fn to_xml(self) -> (String, &'static str) {
        match self {
            Self::Multiple(multiple) => (multiple_to_line_units(multiple).to_string(), "auto"),
            Self::Exact(pt) => (pt_to_twips(pt).to_string(), "exact"),
            Self::AtLeast(pt) => (pt_to_twips(pt).to_string(), "atLeast"),
        }
    }

    /// The line multiple, if this is proportional spacing.
    pub fn multiple(&self) -> Option<f64> {
        match self {
            Self::Multiple(multiple) => Some(*multiple),
            _ => None,
        }
    }
}

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }

    /// Decode a `w:jc/@w:val` value, including the bidi-aware aliases.
    pub(crate) fn from_xml(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "both" | "distribute" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// Paragraph indentation in points. `None` leaves the attribute unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Indentation {
    pub left: Option<f64>,
    pub right: Option<f64>,
    /// Positive for a first-line indent, negative for a hanging indent
    pub first_line: Option<f64>,
}

impl Indentation {
    /// All three indents set to zero.
    pub const ZERO: Self = Self {
        left: Some(0.0),
        right: Some(0.0),
        first_line: Some(0.0),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spacing_from_xml() {
        assert_eq!(LineSpacing::from_xml("360", Some("auto")), Some(LineSpacing::Multiple(1.5)));
        assert_eq!(LineSpacing::from_xml("480", None), Some(LineSpacing::Multiple(2.0)));
        assert_eq!(LineSpacing::from_xml("240", Some("exact")), Some(LineSpacing::Exact(12.0)));
        assert_eq!(LineSpacing::from_xml("280", Some("atLeast")), Some(LineSpacing::AtLeast(14.0)));
        assert_eq!(LineSpacing::from_xml("abc", None), None);
    }

    #[test]
    fn test_line_spacing_to_xml() {
        assert_eq!(LineSpacing::Multiple(1.15).to_xml(), ("276".to_string(), "auto"));
        assert_eq!(LineSpacing::Exact(12.0).to_xml(), ("240".to_string(), "exact"));
    }

    #[test]
    fn test_alignment_aliases() {
        assert_eq!(ParagraphAlignment::from_xml("both"), Some(ParagraphAlignment::Justify));
        assert_eq!(ParagraphAlignment::from_xml("start"), Some(ParagraphAlignment::Left));
        assert_eq!(ParagraphAlignment::Justify.as_str(), "both");
        assert_eq!(ParagraphAlignment::from_xml("mediumKashida"), None);
    }
}
