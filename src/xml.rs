//! Minimal XML node tree and compact serializer.
//!
//! KML output is assembled as a tree of [`Element`]s and serialized in one
//! pass. Serialization is compact: no declaration, no indentation, and every
//! element is written with an explicit end tag (`<ExtendedData></ExtendedData>`
//! rather than `<ExtendedData/>`).
//!
//! # Example
//!
//! ```
//! use geokml::xml::Element;
//!
//! let el = Element::new("Data")
//!     .with_attr("name", "a&b")
//!     .with_child(Element::new("value").with_text("1 < 2"));
//! assert_eq!(
//!     el.to_xml(),
//!     r#"<Data name="a&amp;b"><value>1 &lt; 2</value></Data>"#
//! );
//! ```

use std::fmt::{self, Write};

use quick_xml::escape::{escape, partial_escape};

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute. Attribute order is preserved on output.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append a text node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append several child elements.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Find the first direct child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// Iterate over direct child elements.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Serialize this element (and its subtree) to a compact string.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    /// Serialize into any `fmt::Write` sink.
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_char('<')?;
        out.write_str(&self.name)?;
        for (name, value) in &self.attributes {
            write!(out, " {}=\"{}\"", name, escape(value.as_str()))?;
        }
        out.write_char('>')?;
        for child in &self.children {
            match child {
                Node::Element(el) => el.write_to(out)?,
                Node::Text(text) => out.write_str(&partial_escape(text.as_str()))?,
            }
        }
        write!(out, "</{}>", self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

/// Shorthand for `<name>text</name>`.
pub fn text_element(name: &str, text: impl Into<String>) -> Element {
    Element::new(name).with_text(text)
}
