//! HTML loader
//!
//! Uses html5ever's RcDom and converts the element structure to owned
//! [`Element`]s. html5ever always synthesizes `<html>`, `<head>` and
//! `<body>`; the document root is the only element inside `<body>`, or
//! `<body>` itself when it holds several.

use crate::MarkupError;
use cascade_dom::Element;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML document loader
#[derive(Debug, Default)]
pub struct HtmlLoader;

impl HtmlLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string into its root element
    pub fn parse(&self, html: &str) -> Result<Element, MarkupError> {
        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let body = Self::find_element(&dom.document, "body").ok_or(MarkupError::EmptyDocument)?;
        let mut body = Self::convert(&body).ok_or(MarkupError::EmptyDocument)?;

        let root = if body.children.len() == 1 {
            body.children.remove(0)
        } else {
            body
        };
        tracing::debug!("Parsed HTML document <{}> with {} elements", root.tag, root.count());
        Ok(root)
    }

    /// Depth-first search for the first element with the given tag
    fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
        if let RcNodeData::Element { name, .. } = &handle.data {
            if &*name.local == tag {
                return Some(handle.clone());
            }
        }
        handle
            .children
            .borrow()
            .iter()
            .find_map(|child| Self::find_element(child, tag))
    }

    /// Convert an RcDom element (and its element children) to our format
    fn convert(handle: &Handle) -> Option<Element> {
        let RcNodeData::Element { name, attrs, .. } = &handle.data else {
            return None;
        };

        let mut element = Element::new(name.local.to_string());
        for attr in attrs.borrow().iter() {
            element.push_attr(attr.name.local.to_string(), attr.value.to_string());
        }
        for child in handle.children.borrow().iter() {
            if let Some(child) = Self::convert(child) {
                element.push_child(child);
            }
        }
        Some(element)
    }
}
