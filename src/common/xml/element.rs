//! Lossless, mutable XML element tree.
//!
//! Parts are parsed with the streaming `quick-xml` reader into owned nodes.
//! Text and attribute values are kept in their raw (escaped) form, so a part
//! that is parsed and serialized without modification keeps its character
//! data byte-for-byte. Attribute values are always written in double quotes;
//! a literal `"` from a single-quoted value is stored as `&quot;`.
//!
//! Everything before the root element (declaration, doctype, prolog comments
//! and processing instructions) is dropped, and the declaration is
//! regenerated on output.

use super::escape::{escape_xml, unescape_xml};
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    /// Character data, raw (escaped) as found in the source
    Text(String),
    /// Comment body without the `<!--`/`-->` delimiters
    Comment(String),
    /// CDATA body without the delimiters
    CData(String),
    /// Processing instruction content without the `<?`/`?>` delimiters
    ProcessingInstruction(String),
}

/// An element with its qualified name, attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    name: String,
    /// Attribute pairs in document order; values are raw (escaped)
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element with a qualified name such as `w:p`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter. `value` is unescaped text.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Builder-style text append. `text` is unescaped text.
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(XmlNode::Text(escape_xml(text)));
        self
    }

    /// Parse a complete XML document and return its root element.
    ///
    /// Prolog content (declaration, comments, processing instructions) is
    /// dropped; the declaration is regenerated by [`XmlElement::to_xml_bytes`].
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(false);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;
        let mut buf = Vec::with_capacity(1024);

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    stack.push(Self::from_start(&e));
                },
                Event::Empty(e) => {
                    let element = Self::from_start(&e);
                    Self::attach(&mut stack, &mut root, XmlNode::Element(element))?;
                },
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| OoxmlError::Xml("unbalanced end tag".to_string()))?;
                    Self::attach(&mut stack, &mut root, XmlNode::Element(element))?;
                },
                Event::Text(e) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.push_raw_text(&String::from_utf8_lossy(&e));
                    }
                },
                Event::GeneralRef(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let reference = format!("&{};", String::from_utf8_lossy(&e));
                        parent.push_raw_text(&reference);
                    }
                },
                Event::CData(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let body = String::from_utf8_lossy(&e).into_owned();
                        parent.children.push(XmlNode::CData(body));
                    }
                },
                Event::Comment(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let body = String::from_utf8_lossy(&e).into_owned();
                        parent.children.push(XmlNode::Comment(body));
                    }
                },
                Event::PI(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let content = String::from_utf8_lossy(&e).into_owned();
                        parent.children.push(XmlNode::ProcessingInstruction(content));
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        if !stack.is_empty() {
            return Err(OoxmlError::Xml(format!(
                "unexpected end of document inside <{}>",
                stack.last().map(|e| e.name.as_str()).unwrap_or_default()
            )));
        }
        root.ok_or_else(|| OoxmlError::Xml("document has no root element".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let attributes = e
            .attributes()
            .flatten()
            .map(|attr| {
                (
                    String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                    String::from_utf8_lossy(&attr.value).replace('"', "&quot;"),
                )
            })
            .collect();
        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    fn attach(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        node: XmlNode,
    ) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => match node {
                XmlNode::Element(element) if root.is_none() => *root = Some(element),
                XmlNode::Element(_) => {
                    return Err(OoxmlError::Xml("multiple root elements".to_string()));
                },
                _ => {},
            },
        }
        Ok(())
    }

    /// Append raw text, merging with a preceding text node so that entity
    /// references split out by the reader end up in one node.
    fn push_raw_text(&mut self, raw: &str) {
        if let Some(XmlNode::Text(existing)) = self.children.last_mut() {
            existing.push_str(raw);
        } else {
            self.children.push(XmlNode::Text(raw.to_string()));
        }
    }

    /// Serialize this element as a standalone XML document.
    pub fn to_xml_bytes(&self) -> Vec<u8> {
        let mut out = String::with_capacity(4096);
        out.push_str(XML_DECLARATION);
        out.push_str("\r\n");
        self.write_to(&mut out);
        out.into_bytes()
    }

    /// Serialize this element (without declaration).
    pub fn to_xml_string(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.write_to(out),
                XmlNode::Text(raw) => out.push_str(raw),
                XmlNode::Comment(body) => {
                    out.push_str("<!--");
                    out.push_str(body);
                    out.push_str("-->");
                },
                XmlNode::CData(body) => {
                    out.push_str("<![CDATA[");
                    out.push_str(body);
                    out.push_str("]]>");
                },
                XmlNode::ProcessingInstruction(content) => {
                    out.push_str("<?");
                    out.push_str(content);
                    out.push_str("?>");
                },
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }

    /// Qualified name, e.g. `w:p`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Local name, e.g. `p` for `w:p`.
    #[inline]
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Get an attribute value (unescaped) by qualified name.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| unescape_xml(value))
    }

    /// Set an attribute (value is unescaped text), replacing any existing one.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let escaped = escape_xml(value);
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = escaped,
            None => self.attributes.push((name.to_string(), escaped)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
    }

    #[inline]
    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterate over child elements.
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Iterate mutably over child elements.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut XmlElement> {
        self.children.iter_mut().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// First child element with the given qualified name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children().find(|e| e.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut XmlElement> {
        self.children_mut().find(|e| e.name == name)
    }

    /// Append a child element and return a reference to it.
    pub fn append_child(&mut self, child: XmlElement) -> &mut XmlElement {
        self.children.push(XmlNode::Element(child));
        match self.children.last_mut() {
            Some(XmlNode::Element(element)) => element,
            _ => unreachable!("just pushed an element"),
        }
    }

    /// Insert a child element at a node index.
    pub fn insert_node(&mut self, index: usize, child: XmlElement) {
        let index = index.min(self.children.len());
        self.children.insert(index, XmlNode::Element(child));
    }

    /// Node index of the first child element with the given name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|node| matches!(node, XmlNode::Element(e) if e.name == name))
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Replace all children with a single text node (value is unescaped text).
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(XmlNode::Text(escape_xml(text)));
        }
    }

    /// Unescaped text directly inside this element (not descendants).
    pub fn text(&self) -> String {
        let mut raw = String::new();
        for node in &self.children {
            match node {
                XmlNode::Text(text) => raw.push_str(&unescape_xml(text)),
                XmlNode::CData(body) => raw.push_str(body),
                _ => {},
            }
        }
        raw
    }

    /// Get the child with `name`, creating it at its schema position if absent.
    ///
    /// `order` lists the qualified names allowed in this element in the order
    /// the schema requires. A new child is inserted before the first existing
    /// sibling that comes later in `order`; names missing from `order` are
    /// appended.
    pub fn ensure_child_ordered(&mut self, name: &str, order: &[&str]) -> &mut XmlElement {
        let index = match self.position_of(name) {
            Some(index) => index,
            None => {
                let index = self.ordered_insert_index(name, order);
                self.insert_node(index, XmlElement::new(name));
                index
            },
        };
        match &mut self.children[index] {
            XmlNode::Element(element) => element,
            _ => unreachable!("index points at an element"),
        }
    }

    /// Get the child with `name`, creating it as the first child if absent.
    ///
    /// Property containers (`w:pPr`, `w:rPr`) must lead their parent.
    pub fn ensure_first_child(&mut self, name: &str) -> &mut XmlElement {
        let index = match self.position_of(name) {
            Some(index) => index,
            None => {
                self.children.insert(0, XmlNode::Element(XmlElement::new(name)));
                0
            },
        };
        match &mut self.children[index] {
            XmlNode::Element(element) => element,
            _ => unreachable!("index points at an element"),
        }
    }

    fn ordered_insert_index(&self, name: &str, order: &[&str]) -> usize {
        let Some(rank) = order.iter().position(|n| *n == name) else {
            return self.children.len();
        };
        self.children
            .iter()
            .position(|node| match node {
                XmlNode::Element(e) => order
                    .iter()
                    .position(|n| *n == e.name)
                    .is_some_and(|other| other > rank),
                _ => false,
            })
            .unwrap_or(self.children.len())
    }
}
