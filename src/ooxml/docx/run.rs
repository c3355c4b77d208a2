/// Run accessors: contiguous spans of text sharing character formatting.
use crate::common::XmlElement;
use crate::common::unit::{half_points_to_pt, pt_to_half_points};

/// Schema order of `w:rPr` children (CT_RPr).
pub(crate) const RPR_ORDER: &[&str] = &[
    "w:rStyle",
    "w:rFonts",
    "w:b",
    "w:bCs",
    "w:i",
    "w:iCs",
    "w:caps",
    "w:smallCaps",
    "w:strike",
    "w:dstrike",
    "w:outline",
    "w:shadow",
    "w:emboss",
    "w:imprint",
    "w:noProof",
    "w:snapToGrid",
    "w:vanish",
    "w:webHidden",
    "w:color",
    "w:spacing",
    "w:w",
    "w:kern",
    "w:position",
    "w:sz",
    "w:szCs",
    "w:highlight",
    "w:u",
    "w:effect",
    "w:bdr",
    "w:shd",
    "w:fitText",
    "w:vertAlign",
    "w:rtl",
    "w:cs",
    "w:em",
    "w:lang",
    "w:eastAsianLayout",
    "w:specVanish",
    "w:oMath",
];

/// Read an on/off property such as `<w:b/>` or `<w:b w:val="false"/>`.
///
/// Returns `None` when the property is absent (inherited from the style).
pub(crate) fn toggle_value(props: Option<&XmlElement>, name: &str) -> Option<bool> {
    let element = props?.child(name)?;
    Some(match element.attr("w:val").as_deref() {
        None => true,
        Some(value) => !matches!(value, "0" | "false" | "off"),
    })
}

/// Write an on/off property. `true` is written as the bare element.
pub(crate) fn set_toggle(props: &mut XmlElement, name: &str, order: &[&str], value: bool) {
    let element = props.ensure_child_ordered(name, order);
    if value {
        element.remove_attr("w:val");
    } else {
        element.set_attr("w:val", "0");
    }
}

/// Visible text of a run's content: `w:t`, tabs and breaks.
fn run_text(run: &XmlElement) -> String {
    let mut text = String::new();
    for child in run.children() {
        match child.name() {
            "w:t" => text.push_str(&child.text()),
            "w:tab" | "w:ptab" => text.push('\t'),
            "w:br" | "w:cr" => text.push('\n'),
            "w:noBreakHyphen" => text.push('-'),
            _ => {},
        }
    }
    text
}

/// A read-only view of a `<w:r>` element.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    element: &'a XmlElement,
}

impl<'a> Run<'a> {
    pub(crate) fn new(element: &'a XmlElement) -> Self {
        Self { element }
    }

    fn properties(&self) -> Option<&'a XmlElement> {
        self.element.child("w:rPr")
    }

    /// Get the text content of this run.
    pub fn text(&self) -> String {
        run_text(self.element)
    }

    /// Directly applied bold, `None` if inherited.
    pub fn bold(&self) -> Option<bool> {
        toggle_value(self.properties(), "w:b")
    }

    /// Directly applied small caps, `None` if inherited.
    pub fn small_caps(&self) -> Option<bool> {
        toggle_value(self.properties(), "w:smallCaps")
    }

    /// The Latin (`w:ascii`) font name.
    pub fn font_name(&self) -> Option<String> {
        self.properties()?.child("w:rFonts")?.attr("w:ascii")
    }

    /// Font size in points.
    pub fn font_size(&self) -> Option<f64> {
        let half_points: u32 = self.properties()?.child("w:sz")?.attr("w:val")?.parse().ok()?;
        Some(half_points_to_pt(half_points))
    }

    #[inline]
    pub fn element(&self) -> &'a XmlElement {
        self.element
    }
}

/// A mutable view of a `<w:r>` element.
#[derive(Debug)]
pub struct RunMut<'a> {
    element: &'a mut XmlElement,
}

impl<'a> RunMut<'a> {
    pub(crate) fn new(element: &'a mut XmlElement) -> Self {
        Self { element }
    }

    /// Borrow as a read-only run.
    pub fn as_run(&self) -> Run<'_> {
        Run::new(self.element)
    }

    pub fn text(&self) -> String {
        self.as_run().text()
    }

    fn properties_mut(&mut self) -> &mut XmlElement {
        self.element.ensure_first_child("w:rPr")
    }

    pub fn set_bold(&mut self, bold: bool) {
        set_toggle(self.properties_mut(), "w:b", RPR_ORDER, bold);
    }

    pub fn set_small_caps(&mut self, small_caps: bool) {
        set_toggle(self.properties_mut(), "w:smallCaps", RPR_ORDER, small_caps);
    }

    /// Set the Latin font (`w:ascii` and `w:hAnsi`).
    pub fn set_font_name(&mut self, name: &str) {
        let fonts = self.properties_mut().ensure_child_ordered("w:rFonts", RPR_ORDER);
        fonts.set_attr("w:ascii", name);
        fonts.set_attr("w:hAnsi", name);
    }

    /// Set the font size in points.
    pub fn set_font_size(&mut self, pt: f64) {
        let half_points = pt_to_half_points(pt).to_string();
        self.properties_mut()
            .ensure_child_ordered("w:sz", RPR_ORDER)
            .set_attr("w:val", &half_points);
    }

    /// Replace the run content with a single text node, keeping `w:rPr`.
    pub fn set_text(&mut self, text: &str) {
        let props = self.element.child("w:rPr").cloned();
        self.element.clear_children();
        if let Some(props) = props {
            self.element.append_child(props);
        }
        self.element.append_child(text_element(text));
    }

    /// Upper-case every `w:t` in place. Tabs, breaks and formatting are kept.
    pub fn uppercase_text(&mut self) {
        for t in self.element.children_mut().filter(|c| c.is("w:t")) {
            let upper = t.text().to_uppercase();
            t.set_text(&upper);
        }
    }
}

/// Build a `w:t`, preserving leading and trailing whitespace.
pub(crate) fn text_element(text: &str) -> XmlElement {
    let t = XmlElement::new("w:t").with_text(text);
    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        t.with_attr("xml:space", "preserve")
    } else {
        t
    }
}
