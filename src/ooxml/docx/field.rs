/// Complex field support, used to build table-of-contents fields.
///
/// A complex field is spread over runs: a `begin` field character, the
/// instruction text, a `separate` character, the (cached) result and an `end`
/// character. Word recomputes the result when the field is updated.
use crate::common::XmlElement;
use crate::ooxml::docx::paragraph::ParagraphMut;
use std::fmt::Write as FmtWrite;

/// Field character types (`w:fldChar/@w:fldCharType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChar {
    Begin,
    Separate,
    End,
}

impl FieldChar {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Separate => "separate",
            Self::End => "end",
        }
    }

    /// A run holding only this field character.
    pub fn to_run(self) -> XmlElement {
        XmlElement::new("w:r")
            .with_child(XmlElement::new("w:fldChar").with_attr("w:fldCharType", self.as_str()))
    }
}

/// A run holding only a field instruction, whitespace preserved.
pub fn instruction_run(instruction: &str) -> XmlElement {
    XmlElement::new("w:r").with_child(
        XmlElement::new("w:instrText")
            .with_attr("xml:space", "preserve")
            .with_text(instruction),
    )
}

/// A table of contents (TOC) field.
///
/// The TOC uses heading styles to build an outline of the document.
///
/// # Examples
///
/// ```rust
/// use report_formatter::ooxml::docx::TableOfContents;
///
/// let toc = TableOfContents::new();
/// assert_eq!(toc.build_field_instruction(), r#"TOC \o "1-3" \h \z \u"#);
///
/// let toc = TableOfContents::new().heading_levels(1, 2).hyperlinks(false);
/// assert_eq!(toc.build_field_instruction(), r#"TOC \o "1-2" \z \u"#);
/// ```
#[derive(Debug, Clone)]
pub struct TableOfContents {
    /// Starting heading level (default: 1)
    start_level: u32,
    /// Ending heading level (default: 3)
    end_level: u32,
    /// Entries are hyperlinks (default: true)
    hyperlinks: bool,
    /// Hide tab leaders and page numbers in Web Layout view (default: true)
    hide_in_web_layout: bool,
    /// Also include paragraphs by outline level (default: true)
    use_outline_levels: bool,
}

impl TableOfContents {
    /// Create a new table of contents with default settings.
    ///
    /// Default settings:
    /// - Heading levels 1-3
    /// - Includes hyperlinks
    /// - Hides page numbers in web layout
    /// - Uses paragraph outline levels
    pub fn new() -> Self {
        Self {
            start_level: 1,
            end_level: 3,
            hyperlinks: true,
            hide_in_web_layout: true,
            use_outline_levels: true,
        }
    }

    /// Set the heading levels to include.
    ///
    /// # Arguments
    ///
    /// * `start` - Starting level (1-9)
    /// * `end` - Ending level (1-9, must be >= start)
    pub fn heading_levels(mut self, start: u32, end: u32) -> Self {
        self.start_level = start.clamp(1, 9);
        self.end_level = end.clamp(self.start_level, 9);
        self
    }

    /// Set whether to include hyperlinks (default: true).
    pub fn hyperlinks(mut self, enabled: bool) -> Self {
        self.hyperlinks = enabled;
        self
    }

    pub fn hide_in_web_layout(mut self, enabled: bool) -> Self {
        self.hide_in_web_layout = enabled;
        self
    }

    pub fn use_outline_levels(mut self, enabled: bool) -> Self {
        self.use_outline_levels = enabled;
        self
    }

    #[inline]
    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    #[inline]
    pub fn end_level(&self) -> u32 {
        self.end_level
    }

    /// Build the TOC field instruction string.
    ///
    /// Format: TOC \o "1-3" \h \z \u
    /// - \o "1-3" = heading styles 1 through 3
    /// - \h = hyperlinks
    /// - \z = hide tab leader and page numbers in Web Layout view
    /// - \u = use applied paragraph outline levels
    pub fn build_field_instruction(&self) -> String {
        let mut instruction = String::from("TOC");

        // Writing to a String cannot fail
        let _ = write!(
            &mut instruction,
            r#" \o "{}-{}""#,
            self.start_level, self.end_level
        );

        if self.hyperlinks {
            instruction.push_str(" \\h");
        }
        if self.hide_in_web_layout {
            instruction.push_str(" \\z");
        }
        if self.use_outline_levels {
            instruction.push_str(" \\u");
        }

        instruction
    }

    /// The four field runs: begin, instruction, separate, end.
    ///
    /// No cached result is written; the field shows nothing until it is
    /// updated by a word processor.
    pub fn field_runs(&self) -> [XmlElement; 4] {
        [
            FieldChar::Begin.to_run(),
            instruction_run(&self.build_field_instruction()),
            FieldChar::Separate.to_run(),
            FieldChar::End.to_run(),
        ]
    }

    /// Append the field runs to the end of a paragraph.
    pub fn append_to(&self, paragraph: &mut ParagraphMut<'_>) {
        for run in self.field_runs() {
            paragraph.append_element(run);
        }
    }
}

impl Default for TableOfContents {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a default table-of-contents field (`TOC \o "1-3" \h \z \u`) to a paragraph.
pub fn insert_toc(paragraph: &mut ParagraphMut<'_>) {
    TableOfContents::new().append_to(paragraph);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels_clamped() {
        let toc = TableOfContents::new().heading_levels(0, 12);
        assert_eq!((toc.start_level(), toc.end_level()), (1, 9));

        let toc = TableOfContents::new().heading_levels(4, 2);
        assert_eq!((toc.start_level(), toc.end_level()), (4, 4));
    }

    #[test]
    fn test_insert_toc_appends_four_runs() {
        let mut p = XmlElement::parse(br#"<w:p><w:r><w:t>Table of Contents</w:t></w:r></w:p>"#).unwrap();
        insert_toc(&mut ParagraphMut::new(&mut p, "TOC Heading".to_string()));

        let runs: Vec<String> = p.children().map(|r| r.to_xml_string()).collect();
        assert_eq!(
            runs,
            [
                "<w:r><w:t>Table of Contents</w:t></w:r>",
                r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#,
                r#"<w:r><w:instrText xml:space="preserve">TOC \o &quot;1-3&quot; \h \z \u</w:instrText></w:r>"#,
                r#"<w:r><w:fldChar w:fldCharType="separate"/></w:r>"#,
                r#"<w:r><w:fldChar w:fldCharType="end"/></w:r>"#,
            ]
        );
    }

    #[test]
    fn test_instruction_text_reads_back_unescaped() {
        let run = instruction_run(r#"TOC \o "1-3""#);
        assert_eq!(run.child("w:instrText").unwrap().text(), r#"TOC \o "1-3""#);
    }
}
