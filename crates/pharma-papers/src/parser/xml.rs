//! Minimal XML element tree built from `quick-xml` events.
//!
//! PubMed records are queried with descendant lookups ("first `PMID`
//! anywhere under the article"), which is awkward to express as a streaming
//! state machine. The efetch payload for a single batch is small enough to
//! hold in memory, so it is read once into a tree.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Errors raised while reading an XML document.
#[derive(thiserror::Error, Debug)]
pub enum XmlError {
    /// Tokenizer error (mismatched tags, bad syntax, invalid UTF-8)
    #[error("malformed XML at byte {position}: {source}")]
    Syntax {
        /// Byte offset of the error
        position: u64,
        /// Underlying quick-xml error
        #[source]
        source: quick_xml::Error,
    },

    /// Document ended inside an element
    #[error("unexpected end of document inside <{0}>")]
    Unclosed(String),

    /// No element at the top level
    #[error("document has no root element")]
    NoRoot,

    /// Elements nested deeper than [`MAX_DEPTH`]
    #[error("elements nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Deepest element nesting accepted. PubMed records stay well under 20.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its child elements and text, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    children: Vec<Node>,
}

impl Element {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), children: Vec::new() }
    }

    /// Local tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct child elements.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First direct child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().find(|e| e.name == name)
    }

    /// First descendant (pre-order, excluding `self`) with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        for child in self.children() {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants (pre-order, excluding `self`) with the given name.
    #[must_use]
    pub fn find_all(&self, name: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a Self>) {
        for child in self.children() {
            if child.name == name {
                out.push(child);
            }
            child.collect_named(name, out);
        }
    }

    /// All text under this element, including text inside nested markup.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.push_text(out),
            }
        }
    }

    /// Trimmed text of the first direct child with the given name.
    ///
    /// Returns `None` if the child is missing or has only whitespace.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<String> {
        non_blank(self.child(name)?.text())
    }
}

/// Trim a string, mapping blank results to `None`.
pub(crate) fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a document and return its root element.
pub fn parse_document(xml: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(xml);

    // Bottom of the stack collects top-level nodes.
    let mut stack = vec![Element::new("")];

    loop {
        let event = reader.read_event().map_err(|source| XmlError::Syntax {
            position: reader.error_position(),
            source,
        })?;

        match event {
            Event::Start(e) => {
                if stack.len() > MAX_DEPTH {
                    return Err(XmlError::TooDeep(MAX_DEPTH));
                }
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                stack.push(Element::new(name));
            }
            Event::End(_) => {
                if stack.len() > 1 {
                    if let Some(done) = stack.pop() {
                        push_node(&mut stack, Node::Element(done));
                    }
                }
            }
            Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                push_node(&mut stack, Node::Element(Element::new(name)));
            }
            Event::Text(e) => {
                if stack.len() > 1 {
                    let text = match e.unescape() {
                        Ok(text) => text.into_owned(),
                        // Entities declared in the DTD are kept verbatim.
                        Err(_) => String::from_utf8_lossy(&e).into_owned(),
                    };
                    push_node(&mut stack, Node::Text(text));
                }
            }
            Event::CData(e) => {
                if stack.len() > 1 {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    push_node(&mut stack, Node::Text(text));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() > 1 {
        let open = stack.pop().map(|e| e.name).unwrap_or_default();
        return Err(XmlError::Unclosed(open));
    }

    stack
        .pop()
        .and_then(|document| {
            document.children.into_iter().find_map(|node| match node {
                Node::Element(e) => Some(e),
                Node::Text(_) => None,
            })
        })
        .ok_or(XmlError::NoRoot)
}

fn push_node(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}
