// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimal owned XML tree on top of `quick-xml`
//!
//! Holds exactly what the lattice schema needs: elements, attributes in
//! document order, top-level comments and the declaration. Text content and
//! processing instructions are dropped while parsing.

use ltcx_model::{LatticeError, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::borrow::Cow;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

/// Top-level document item
#[derive(Clone, Debug, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Comment(String),
}

/// XML element with attributes and child elements
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element without attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Set an attribute, replacing an existing one of the same name
    pub fn set_attribute(&mut self, name: &str, value: impl Display) {
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Builder form of [`XmlElement::set_attribute`]
    pub fn with_attribute(mut self, name: &str, value: impl Display) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Child elements with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First child element with the given name
    pub fn first_child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = XmlElement::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr.map_err(|e| LatticeError::xml(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| LatticeError::xml(e.to_string()))?
                .into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            return emit(writer, Event::Empty(start));
        }

        emit(writer, Event::Start(start))?;
        for child in &self.children {
            child.write(writer)?;
        }
        emit(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

/// Parsed XML document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlDocument {
    declaration: Option<String>,
    nodes: Vec<XmlNode>,
}

impl XmlDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from text
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().trim_text(true);

        let mut doc = XmlDocument::new();
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| LatticeError::xml(format!("at byte {}: {}", reader.buffer_position(), e)))?;

            match event {
                Event::Decl(decl) => {
                    let version = decl
                        .version()
                        .map_err(|e| LatticeError::xml(e.to_string()))?;
                    doc.declaration = Some(String::from_utf8_lossy(&version).into_owned());
                }
                Event::Start(start) => stack.push(XmlElement::from_start(&start)?),
                Event::Empty(start) => {
                    let element = XmlElement::from_start(&start)?;
                    doc.attach(&mut stack, element);
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| LatticeError::xml("unexpected closing tag"))?;
                    doc.attach(&mut stack, element);
                }
                Event::Comment(text) if stack.is_empty() => {
                    doc.nodes
                        .push(XmlNode::Comment(String::from_utf8_lossy(&text).into_owned()));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(LatticeError::xml(format!("unclosed element <{}>", open.name)));
        }

        Ok(doc)
    }

    /// Parse a document from raw bytes (must be UTF-8)
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| LatticeError::xml(e.to_string()))?;
        Self::parse(text)
    }

    /// Load and parse a file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::parse_bytes(&bytes)
    }

    /// Version of the XML declaration, if any
    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }

    pub fn set_declaration(&mut self, version: impl Into<String>) {
        self.declaration = Some(version.into());
    }

    /// Top-level items in document order
    pub fn nodes(&self) -> &[XmlNode] {
        &self.nodes
    }

    pub fn push_comment(&mut self, comment: impl Into<String>) {
        self.nodes.push(XmlNode::Comment(comment.into()));
    }

    pub fn push_element(&mut self, element: XmlElement) {
        self.nodes.push(XmlNode::Element(element));
    }

    /// Top-level elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.nodes.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Comment(_) => None,
        })
    }

    /// Top-level elements with the given name
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |element| element.name == name)
    }

    /// Top-level comments in document order
    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            XmlNode::Comment(text) => Some(text.as_str()),
            XmlNode::Element(_) => None,
        })
    }

    /// Serialize to bytes; `indent` spaces per level, 0 for a single line
    pub fn to_bytes(&self, indent: usize) -> Result<Vec<u8>> {
        let mut writer = if indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', indent)
        } else {
            Writer::new(Vec::new())
        };

        if let Some(version) = &self.declaration {
            emit(
                &mut writer,
                Event::Decl(BytesDecl::new(version, Some("UTF-8"), None)),
            )?;
        }

        for node in &self.nodes {
            match node {
                XmlNode::Element(element) => element.write(&mut writer)?,
                XmlNode::Comment(text) => {
                    emit(&mut writer, Event::Comment(BytesText::from_escaped(comment_text(text))))?
                }
            }
        }

        Ok(writer.into_inner())
    }

    /// Serialize to a string
    pub fn to_xml_string(&self, indent: usize) -> Result<String> {
        let bytes = self.to_bytes(indent)?;
        String::from_utf8(bytes).map_err(|e| LatticeError::xml(e.to_string()))
    }

    /// Serialize and write to a file
    pub fn save_file(&self, path: impl AsRef<Path>, indent: usize) -> Result<()> {
        let bytes = self.to_bytes(indent)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn attach(&mut self, stack: &mut [XmlElement], element: XmlElement) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None => self.nodes.push(XmlNode::Element(element)),
        }
    }
}

/// Comment body with `--` pairs split apart; XML forbids them inside comments
fn comment_text(text: &str) -> Cow<'_, str> {
    if !text.contains("--") && !text.ends_with('-') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if c == '-' && out.ends_with('-') {
            out.push(' ');
        }
        out.push(c);
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    Cow::Owned(out)
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| LatticeError::xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!--generated-->
<graph id="1" name="a &amp; b">
    <nodegroup>
        <node id="0" x="1.5"/>
        <node id="1" x="2"></node>
    </nodegroup>
</graph>
<other/>
"#;

    #[test]
    fn test_parse_tree() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();
        assert_eq!(doc.declaration(), Some("1.0"));
        assert_eq!(doc.comments().collect::<Vec<_>>(), vec!["generated"]);
        assert_eq!(doc.elements().count(), 2);

        let graph = doc.elements_named("graph").next().unwrap();
        assert_eq!(graph.attribute("id"), Some("1"));
        assert_eq!(graph.attribute("name"), Some("a & b"));
        assert_eq!(graph.attribute("units"), None);

        let nodes: Vec<_> = graph
            .first_child("nodegroup")
            .unwrap()
            .children_named("node")
            .collect();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].attribute("x"), Some("2"));
    }

    #[test]
    fn test_parse_rejects_mismatched_tags() {
        let result = XmlDocument::parse("<graph><nodegroup></graph>");
        assert!(matches!(result, Err(LatticeError::Xml(_))));
    }

    #[test]
    fn test_parse_rejects_unclosed_element() {
        let result = XmlDocument::parse("<graph><nodegroup/>");
        assert!(matches!(result, Err(LatticeError::Xml(_))));
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut element = XmlElement::new("node").with_attribute("x", 1);
        element.set_attribute("x", 2.5);
        element.set_attribute("y", "3");
        assert_eq!(element.attributes().len(), 2);
        assert_eq!(element.attribute("x"), Some("2.5"));
    }

    #[test]
    fn test_write_compact() {
        let mut doc = XmlDocument::new();
        doc.set_declaration("1.0");
        doc.push_comment("hello");
        let mut graph = XmlElement::new("graph").with_attribute("name", "<x>");
        graph.push_child(XmlElement::new("nodegroup"));
        doc.push_element(graph);

        let text = doc.to_xml_string(0).unwrap();
        assert_eq!(
            text,
            r#"<?xml version="1.0" encoding="UTF-8"?><!--hello--><graph name="&lt;x&gt;"><nodegroup/></graph>"#
        );
    }

    #[test]
    fn test_comment_dashes_stay_well_formed() {
        assert_eq!(comment_text("plain - text"), "plain - text");
        assert_eq!(comment_text("a---b"), "a- - -b");
        assert_eq!(comment_text("trailing-"), "trailing- ");

        let mut doc = XmlDocument::new();
        doc.push_comment("v1 -- rev --> done");
        doc.push_element(XmlElement::new("graph"));

        let text = doc.to_xml_string(0).unwrap();
        assert_eq!(text, "<!--v1 - - rev - -> done--><graph/>");

        let again = XmlDocument::parse(&text).unwrap();
        assert_eq!(again.comments().collect::<Vec<_>>(), vec!["v1 - - rev - -> done"]);
        assert_eq!(again.elements_named("graph").count(), 1);
    }

    #[test]
    fn test_write_then_parse() {
        let doc = XmlDocument::parse(SAMPLE).unwrap();
        let text = doc.to_xml_string(2).unwrap();
        let again = XmlDocument::parse(&text).unwrap();
        assert_eq!(again, doc);
    }

    #[test]
    fn test_load_missing_file() {
        let result = XmlDocument::load_file("/definitely/not/here.ltcx");
        assert!(matches!(result, Err(LatticeError::Io(_))));
    }
}
