//! Source elements
//!
//! The tree loader consumes already-parsed elements through the
//! [`SourceElement`] trait. [`Element`] is the owned implementation produced
//! by the markup loaders and used to build trees by hand.

use crate::{CLASS_TAG, DEFAULT_CLASS};

/// Role of a child element inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// Regular document node
    Ordinary,
    /// `<class name="...">` declaration
    Class,
    /// `<default>` declaration
    Default,
}

impl ElementRole {
    /// Classify a child by its tag name
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            CLASS_TAG => Self::Class,
            DEFAULT_CLASS => Self::Default,
            _ => Self::Ordinary,
        }
    }

    #[inline]
    pub fn is_declaration(self) -> bool {
        self != Self::Ordinary
    }
}

/// Check if a tag is one of the reserved class declaration tags
pub fn is_special_tag(tag: &str) -> bool {
    ElementRole::from_tag(tag).is_declaration()
}

/// A parsed document element the tree can be loaded from
pub trait SourceElement {
    /// Tag or type name
    fn tag_name(&self) -> &str;

    /// Attribute name/value pairs in document order
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Child elements in document order
    fn children(&self) -> Vec<&Self>;

    /// Role of this element when it appears as a child
    fn role(&self) -> ElementRole {
        ElementRole::from_tag(self.tag_name())
    }

    /// Attribute value by name, the last duplicate wins
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .into_iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

/// Owned source element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `<class name="...">` declaration
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(CLASS_TAG).attr("name", name)
    }

    /// `<default>` declaration
    pub fn default_class() -> Self {
        Self::new(DEFAULT_CLASS)
    }

    /// Builder: add an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Builder: add a child
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Number of elements in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

impl SourceElement for Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attrs
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }
}
