//! XML loader built on quick-xml

use crate::MarkupError;
use cascade_dom::Element;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// XML document loader
#[derive(Debug, Default)]
pub struct XmlLoader;

impl XmlLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse an XML string into its root element
    pub fn parse(&self, xml: &str) -> Result<Element, MarkupError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|source| MarkupError::Xml {
                position: reader.buffer_position() as u64,
                source,
            })?;
            let position = reader.buffer_position() as u64;

            match event {
                Event::Start(start) => open.push(Self::element(&start, position)?),
                Event::Empty(start) => {
                    let element = Self::element(&start, position)?;
                    Self::close(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open.pop().ok_or(MarkupError::UnexpectedClose)?;
                    Self::close(&mut open, &mut root, element)?;
                }
                Event::Eof => break,
                // Text, comments, CDATA, declarations
                _ => {}
            }
        }

        if let Some(unclosed) = open.pop() {
            return Err(MarkupError::Unclosed { tag: unclosed.tag });
        }
        let root = root.ok_or(MarkupError::EmptyDocument)?;
        tracing::debug!("Parsed XML document <{}> with {} elements", root.tag, root.count());
        Ok(root)
    }

    fn element(start: &BytesStart<'_>, position: u64) -> Result<Element, MarkupError> {
        let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            let value = attr
                .unescape_value()
                .map_err(|source| MarkupError::Xml { position, source })?;
            element.push_attr(String::from_utf8_lossy(attr.key.as_ref()), value.into_owned());
        }
        Ok(element)
    }

    /// Attach a finished element to its parent, or make it the root
    fn close(
        open: &mut [Element],
        root: &mut Option<Element>,
        element: Element,
    ) -> Result<(), MarkupError> {
        if let Some(parent) = open.last_mut() {
            parent.push_child(element);
        } else if root.is_some() {
            return Err(MarkupError::MultipleRoots { tag: element.tag });
        } else {
            *root = Some(element);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let root = XmlLoader::new()
            .parse(r#"<config a="1"><default b="2"/><item/></config>"#)
            .unwrap();

        assert_eq!(root.tag, "config");
        assert_eq!(root.attrs, vec![("a".to_string(), "1".to_string())]);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].tag, "default");
    }

    #[test]
    fn test_text_ignored() {
        let root = XmlLoader::new()
            .parse("<root>hello<item>text</item><!-- note --></root>")
            .unwrap();
        assert_eq!(root.count(), 2);
    }

    #[test]
    fn test_unescape_attribute() {
        let root = XmlLoader::new().parse(r#"<root title="a &amp; b"/>"#).unwrap();
        assert_eq!(root.attrs[0].1, "a & b");
    }
}
