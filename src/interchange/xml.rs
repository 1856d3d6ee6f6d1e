//! Owned XML element tree for flow documents.
//!
//! Flow documents are small enough to hold in memory, and the extractor
//! needs to look at siblings and descendants of a `messageFlow` element,
//! so the event stream is folded into an [`XmlElement`] tree first.
//!
//! Tag names are kept exactly as written (prefix included). Callers
//! compare them through [`crate::base::local_name`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::base::{is_local, local_name};

use super::InterchangeError;

/// One element of a parsed XML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified tag name as it appears in the document.
    pub name: String,
    /// Character data before the first child element.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Append a child element.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Local part of the tag name.
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Whether the tag has the given local name, whatever its prefix.
    pub fn is(&self, local: &str) -> bool {
        is_local(&self.name, local)
    }

    /// Element text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Depth-first, pre-order walk over this element and all descendants.
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Direct children with the given local name.
    pub fn children_named<'a, 'b>(&'a self, local: &'b str) -> impl Iterator<Item = &'a XmlElement> {
        self.children
            .iter()
            .filter(move |child| child.is(local))
    }

    /// First direct child with the given local name.
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.children_named(local).next()
    }
}

/// Iterator returned by [`XmlElement::iter`].
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Parse a complete XML document and return its root element.
pub fn parse_document(input: &[u8]) -> Result<XmlElement, InterchangeError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();

    // Open elements, innermost last.
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(XmlElement::new(tag_name(e)?));
            }
            Ok(Event::Empty(ref e)) => {
                let element = XmlElement::new(tag_name(e)?);
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| InterchangeError::xml("Unexpected closing tag"))?;
                close_element(&mut stack, &mut root, finish_text(element))?;
            }
            Ok(Event::Text(ref t)) => {
                let text = t.unescape().map_err(|e| {
                    InterchangeError::xml(format!(
                        "Invalid text at position {}: {e}",
                        reader.buffer_position()
                    ))
                })?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(c)) => {
                let raw = c.into_inner();
                let text = std::str::from_utf8(&raw)
                    .map_err(|e| InterchangeError::xml(format!("Invalid CDATA: {e}")))?;
                append_text(&mut stack, text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(InterchangeError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(InterchangeError::xml(format!(
            "Unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| InterchangeError::xml("Document has no root element"))
}

fn tag_name(e: &BytesStart<'_>) -> Result<String, InterchangeError> {
    let name = e.name();
    std::str::from_utf8(name.as_ref())
        .map(str::to_string)
        .map_err(|e| InterchangeError::xml(format!("Invalid tag name: {e}")))
}

/// Attach a completed element to its parent, or make it the root.
fn close_element(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), InterchangeError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(InterchangeError::xml("Multiple root elements")),
    }
    Ok(())
}

fn append_text(stack: &mut [XmlElement], text: &str) {
    if let Some(current) = stack.last_mut() {
        // Only text ahead of the first child counts as the element's text.
        if current.children.is_empty() {
            current
                .text
                .get_or_insert_with(String::new)
                .push_str(text);
        }
    }
}

fn finish_text(mut element: XmlElement) -> XmlElement {
    if element.text.as_deref() == Some("") {
        element.text = None;
    }
    element
}
