//! Paragraph classification by style name.

/// What the formatter does with a paragraph, decided once from its style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphKind {
    /// `Heading 1`
    TopHeading,
    /// `Heading 2`
    SecondHeading,
    /// Any other style whose name mentions "heading" (`Heading 3`, `TOC Heading`, ...)
    OtherHeading,
    Body,
}

impl ParagraphKind {
    /// Classify a paragraph style name, ignoring case.
    ///
    /// The name is a heading if it contains `heading`; the number that
    /// follows (optionally after whitespace) is its level.
    ///
    /// ```
    /// use report_formatter::format::ParagraphKind;
    ///
    /// assert_eq!(ParagraphKind::classify("heading 1"), ParagraphKind::TopHeading);
    /// assert_eq!(ParagraphKind::classify("Heading2"), ParagraphKind::SecondHeading);
    /// assert_eq!(ParagraphKind::classify("TOC Heading"), ParagraphKind::OtherHeading);
    /// assert_eq!(ParagraphKind::classify("Normal"), ParagraphKind::Body);
    /// ```
    pub fn classify(style_name: &str) -> Self {
        let lower = style_name.to_lowercase();
        let Some(pos) = lower.find("heading") else {
            return Self::Body;
        };
        match heading_level(&lower[pos + "heading".len()..]) {
            Some(1) => Self::TopHeading,
            Some(2) => Self::SecondHeading,
            _ => Self::OtherHeading,
        }
    }

    #[inline]
    pub fn is_heading(&self) -> bool {
        !matches!(self, Self::Body)
    }
}

fn heading_level(rest: &str) -> Option<u32> {
    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
