/// Styles - the style table of a Word document (`word/styles.xml`).
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use smallvec::SmallVec;

/// Name used when a document defines no default paragraph style.
pub const DEFAULT_PARAGRAPH_STYLE_NAME: &str = "Normal";

/// The kind of object a style applies to (`w:style/@w:type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    #[default]
    Paragraph,
    Character,
    Table,
    Numbering,
}

impl StyleType {
    fn from_xml(value: &str) -> Option<Self> {
        match value {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "table" => Some(Self::Table),
            "numbering" => Some(Self::Numbering),
            _ => None,
        }
    }
}

/// A single style definition in a Word document.
///
/// Represents a `<w:style>` element with the properties needed to resolve a
/// paragraph's style name.
#[derive(Debug, Clone)]
pub struct Style {
    /// Style identifier (required)
    style_id: String,
    /// UI-visible name
    name: Option<String>,
    style_type: StyleType,
    /// Whether this is the default style for its type
    is_default: bool,
}

impl Style {
    /// Get the style identifier.
    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Get the style name.
    ///
    /// Returns `None` if no name is defined.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn style_type(&self) -> StyleType {
        self.style_type
    }

    /// Check if this is the default style for its type.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// A collection of styles defined in a Word document.
///
/// Supports lookup by style ID or name, and resolution of the UI name that a
/// paragraph's `w:pStyle` reference stands for.
#[derive(Debug, Default)]
pub struct Styles {
    styles: SmallVec<[Style; 32]>,
}

/// Builder for constructing Style objects during XML parsing.
#[derive(Debug, Default)]
struct StyleBuilder {
    style_id: Option<String>,
    name: Option<String>,
    style_type: StyleType,
    is_default: bool,
}

impl Styles {
    /// Parse a styles part.
    pub fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut styles = SmallVec::new();
        let mut current_style: Option<StyleBuilder> = None;
        let mut buf = Vec::with_capacity(512);

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"style" => {
                    current_style = Some(Self::start_style(&reader, &e));
                },
                Ok(Event::Empty(e)) if e.local_name().as_ref() == b"style" => {
                    // A self-closing style has no name; keep it for id lookups.
                    Self::finish_style(&mut styles, Some(Self::start_style(&reader, &e)));
                },
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.local_name().as_ref() == b"name" => {
                    if let Some(builder) = current_style.as_mut() {
                        for attr in e.attributes().flatten() {
                            if attr.key.local_name().as_ref() == b"val"
                                && let Ok(value) = attr.decode_and_unescape_value(reader.decoder())
                            {
                                builder.name = Some(value.into_owned());
                            }
                        }
                    }
                },
                Ok(Event::End(e)) if e.local_name().as_ref() == b"style" => {
                    Self::finish_style(&mut styles, current_style.take());
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Ok(Self { styles })
    }

    fn start_style(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> StyleBuilder {
        let mut builder = StyleBuilder::default();
        for attr in e.attributes().flatten() {
            let Ok(value) = attr.decode_and_unescape_value(reader.decoder()) else {
                continue;
            };
            match attr.key.local_name().as_ref() {
                b"type" => builder.style_type = StyleType::from_xml(&value).unwrap_or_default(),
                b"styleId" => builder.style_id = Some(value.into_owned()),
                b"default" => builder.is_default = value == "1" || value == "true",
                _ => {},
            }
        }
        builder
    }

    fn finish_style(styles: &mut SmallVec<[Style; 32]>, builder: Option<StyleBuilder>) {
        if let Some(builder) = builder
            && let Some(style_id) = builder.style_id
        {
            styles.push(Style {
                style_id,
                name: builder.name,
                style_type: builder.style_type,
                is_default: builder.is_default,
            });
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Style> {
        self.styles.iter()
    }

    /// Get a style by its ID.
    pub fn get_by_id(&self, style_id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.style_id == style_id)
    }

    /// Get a style by its UI name.
    pub fn get_by_name(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name.as_deref() == Some(name))
    }

    /// Get the default style for a given style type.
    pub fn get_default(&self, style_type: StyleType) -> Option<&Style> {
        self.styles
            .iter()
            .find(|s| s.is_default && s.style_type == style_type)
    }

    /// Resolve the UI name of a paragraph style reference.
    ///
    /// A paragraph without `w:pStyle` uses the default paragraph style. An id
    /// that is not in the table (or a style without a name) resolves to the id
    /// itself.
    pub fn paragraph_style_name(&self, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => self
                .get_by_id(id)
                .and_then(Style::name)
                .unwrap_or(id)
                .to_string(),
            None => self
                .get_default(StyleType::Paragraph)
                .map(|s| s.name().unwrap_or(s.style_id()))
                .unwrap_or(DEFAULT_PARAGRAPH_STYLE_NAME)
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Standard"><w:name w:val="Body &amp; Text"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Standard"/></w:style>
  <w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont"><w:name w:val="Default Paragraph Font"/></w:style>
  <w:style w:type="paragraph" w:styleId="Unnamed"/>
</w:styles>"#;

    #[test]
    fn test_parse_styles() {
        let styles = Styles::from_xml(STYLES).unwrap();
        assert_eq!(styles.len(), 4);

        let heading = styles.get_by_id("Heading1").unwrap();
        assert_eq!(heading.name(), Some("heading 1"));
        assert_eq!(heading.style_type(), StyleType::Paragraph);
        assert!(!heading.is_default());

        assert_eq!(styles.get_by_name("Default Paragraph Font").unwrap().style_type(), StyleType::Character);
        assert_eq!(styles.get_default(StyleType::Paragraph).unwrap().style_id(), "Standard");
    }

    #[test]
    fn test_paragraph_style_name_resolution() {
        let styles = Styles::from_xml(STYLES).unwrap();
        assert_eq!(styles.paragraph_style_name(Some("Heading1")), "heading 1");
        assert_eq!(styles.paragraph_style_name(None), "Body & Text");
        assert_eq!(styles.paragraph_style_name(Some("TOCHeading")), "TOCHeading");
        assert_eq!(styles.paragraph_style_name(Some("Unnamed")), "Unnamed");
    }

    #[test]
    fn test_empty_table_defaults_to_normal() {
        let styles = Styles::default();
        assert!(styles.is_empty());
        assert_eq!(styles.paragraph_style_name(None), DEFAULT_PARAGRAPH_STYLE_NAME);
    }
}
