/// Paragraph accessors for Word documents.
use crate::common::XmlElement;
use crate::common::unit::{pt_to_twips, twips_to_pt};
use crate::ooxml::docx::format::{Indentation, LineSpacing, ParagraphAlignment};
use crate::ooxml::docx::run::{Run, RunMut, set_toggle, text_element, toggle_value};
use smallvec::SmallVec;

/// Schema order of `w:pPr` children (CT_PPr).
pub(crate) const PPR_ORDER: &[&str] = &[
    "w:pStyle",
    "w:keepNext",
    "w:keepLines",
    "w:pageBreakBefore",
    "w:framePr",
    "w:widowControl",
    "w:numPr",
    "w:suppressLineNumbers",
    "w:pBdr",
    "w:shd",
    "w:tabs",
    "w:suppressAutoHyphens",
    "w:kinsoku",
    "w:wordWrap",
    "w:overflowPunct",
    "w:topLinePunct",
    "w:autoSpaceDE",
    "w:autoSpaceDN",
    "w:bidi",
    "w:adjustRightInd",
    "w:snapToGrid",
    "w:spacing",
    "w:ind",
    "w:contextualSpacing",
    "w:mirrorIndents",
    "w:suppressOverlap",
    "w:jc",
    "w:textDirection",
    "w:textAlignment",
    "w:textboxTightWrap",
    "w:outlineLvl",
    "w:divId",
    "w:cnfStyle",
    "w:rPr",
    "w:sectPr",
    "w:pPrChange",
];

fn twips_attr(element: &XmlElement, name: &str) -> Option<f64> {
    element.attr(name)?.trim().parse::<i64>().ok().map(twips_to_pt)
}

/// A read-only view of a `<w:p>` element.
///
/// Represents a `<w:p>` element. Paragraphs contain runs which in turn
/// contain the actual text and formatting. Only direct `w:r` children count
/// as runs; runs nested in hyperlinks or content controls are left alone.
///
/// # Example
///
/// ```rust,ignore
/// for para in document.paragraphs() {
///     println!("[{}] {}", para.style_name(), para.text());
///     for run in para.runs() {
///         println!("  Run: {} (bold: {:?})", run.text(), run.bold());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Paragraph<'a> {
    element: &'a XmlElement,
    style_name: String,
}

impl<'a> Paragraph<'a> {
    pub(crate) fn new(element: &'a XmlElement, style_name: String) -> Self {
        Self {
            element,
            style_name,
        }
    }

    fn properties(&self) -> Option<&'a XmlElement> {
        self.element.child("w:pPr")
    }

    /// The `w:pStyle` id, if the paragraph references a style directly.
    pub fn style_id(&self) -> Option<String> {
        self.properties()?.child("w:pStyle")?.attr("w:val")
    }

    /// The resolved UI style name, e.g. `heading 1` or `Normal`.
    #[inline]
    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    /// Get the text content of this paragraph.
    ///
    /// Concatenates the text of all runs in the paragraph.
    pub fn text(&self) -> String {
        self.runs().iter().map(Run::text).collect()
    }

    /// Get the runs in this paragraph.
    pub fn runs(&self) -> SmallVec<[Run<'a>; 8]> {
        self.element
            .children()
            .filter(|c| c.is("w:r"))
            .map(Run::new)
            .collect()
    }

    pub fn alignment(&self) -> Option<ParagraphAlignment> {
        let value = self.properties()?.child("w:jc")?.attr("w:val")?;
        ParagraphAlignment::from_xml(&value)
    }

    /// Space before the paragraph in points.
    pub fn space_before(&self) -> Option<f64> {
        twips_attr(self.properties()?.child("w:spacing")?, "w:before")
    }

    /// Space after the paragraph in points.
    pub fn space_after(&self) -> Option<f64> {
        twips_attr(self.properties()?.child("w:spacing")?, "w:after")
    }

    pub fn line_spacing(&self) -> Option<LineSpacing> {
        let spacing = self.properties()?.child("w:spacing")?;
        let line = spacing.attr("w:line")?;
        LineSpacing::from_xml(&line, spacing.attr("w:lineRule").as_deref())
    }

    /// Indentation in points; a hanging indent reads as a negative first line.
    pub fn indentation(&self) -> Indentation {
        let Some(ind) = self.properties().and_then(|p| p.child("w:ind")) else {
            return Indentation::default();
        };
        let left = twips_attr(ind, "w:left").or_else(|| twips_attr(ind, "w:start"));
        let right = twips_attr(ind, "w:right").or_else(|| twips_attr(ind, "w:end"));
        let first_line = twips_attr(ind, "w:firstLine")
            .or_else(|| twips_attr(ind, "w:hanging").map(|hanging| -hanging));
        Indentation {
            left,
            right,
            first_line,
        }
    }

    pub fn page_break_before(&self) -> bool {
        toggle_value(self.properties(), "w:pageBreakBefore").unwrap_or(false)
    }

    /// Whether all lines are kept on one page (`w:keepLines`).
    pub fn keep_together(&self) -> bool {
        toggle_value(self.properties(), "w:keepLines").unwrap_or(false)
    }

    #[inline]
    pub fn element(&self) -> &'a XmlElement {
        self.element
    }
}

/// A mutable view of a `<w:p>` element.
///
/// Setters create `w:pPr` and its children on demand, in schema order, and
/// leave every other property untouched.
#[derive(Debug)]
pub struct ParagraphMut<'a> {
    element: &'a mut XmlElement,
    style_name: String,
}

impl<'a> ParagraphMut<'a> {
    pub(crate) fn new(element: &'a mut XmlElement, style_name: String) -> Self {
        Self {
            element,
            style_name,
        }
    }

    /// Borrow as a read-only paragraph.
    pub fn as_paragraph(&self) -> Paragraph<'_> {
        Paragraph::new(self.element, self.style_name.clone())
    }

    #[inline]
    pub fn style_name(&self) -> &str {
        &self.style_name
    }

    pub fn text(&self) -> String {
        self.as_paragraph().text()
    }

    fn properties_mut(&mut self) -> &mut XmlElement {
        self.element.ensure_first_child("w:pPr")
    }

    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties_mut()
            .ensure_child_ordered("w:jc", PPR_ORDER)
            .set_attr("w:val", alignment.as_str());
    }

    fn spacing_mut(&mut self) -> &mut XmlElement {
        self.properties_mut().ensure_child_ordered("w:spacing", PPR_ORDER)
    }

    /// Set space before in points. Clears `w:beforeAutospacing`.
    pub fn set_space_before(&mut self, pt: f64) {
        let spacing = self.spacing_mut();
        spacing.set_attr("w:before", &pt_to_twips(pt).to_string());
        spacing.remove_attr("w:beforeAutospacing");
        spacing.remove_attr("w:beforeLines");
    }

    /// Set space after in points. Clears `w:afterAutospacing`.
    pub fn set_space_after(&mut self, pt: f64) {
        let spacing = self.spacing_mut();
        spacing.set_attr("w:after", &pt_to_twips(pt).to_string());
        spacing.remove_attr("w:afterAutospacing");
        spacing.remove_attr("w:afterLines");
    }

    pub fn set_line_spacing(&mut self, line_spacing: LineSpacing) {
        let (line, rule) = line_spacing.to_xml();
        let spacing = self.spacing_mut();
        spacing.set_attr("w:line", &line);
        spacing.set_attr("w:lineRule", rule);
    }

    /// Set the indents that are `Some`; a negative first line is written as hanging.
    pub fn set_indentation(&mut self, indentation: Indentation) {
        let ind = self.properties_mut().ensure_child_ordered("w:ind", PPR_ORDER);
        if let Some(left) = indentation.left {
            ind.remove_attr("w:start");
            ind.set_attr("w:left", &pt_to_twips(left).to_string());
        }
        if let Some(right) = indentation.right {
            ind.remove_attr("w:end");
            ind.set_attr("w:right", &pt_to_twips(right).to_string());
        }
        if let Some(first_line) = indentation.first_line {
            ind.remove_attr("w:firstLineChars");
            ind.remove_attr("w:hangingChars");
            if first_line < 0.0 {
                ind.remove_attr("w:firstLine");
                ind.set_attr("w:hanging", &pt_to_twips(-first_line).to_string());
            } else {
                ind.remove_attr("w:hanging");
                ind.set_attr("w:firstLine", &pt_to_twips(first_line).to_string());
            }
        }
    }

    pub fn set_page_break_before(&mut self, value: bool) {
        set_toggle(self.properties_mut(), "w:pageBreakBefore", PPR_ORDER, value);
    }

    pub fn set_keep_together(&mut self, value: bool) {
        set_toggle(self.properties_mut(), "w:keepLines", PPR_ORDER, value);
    }

    /// Mutable views of the direct runs.
    pub fn runs_mut(&mut self) -> SmallVec<[RunMut<'_>; 8]> {
        self.element
            .children_mut()
            .filter(|c| c.is("w:r"))
            .map(RunMut::new)
            .collect()
    }

    /// Append a run holding `text`.
    pub fn add_run(&mut self, text: &str) -> RunMut<'_> {
        let run = XmlElement::new("w:r").with_child(text_element(text));
        RunMut::new(self.element.append_child(run))
    }

    /// Append an arbitrary child element (runs, field markup, bookmarks).
    pub fn append_element(&mut self, element: XmlElement) {
        self.element.append_child(element);
    }
}
