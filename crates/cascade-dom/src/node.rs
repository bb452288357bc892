//! Attribute Node
//!
//! One node of the attribute tree: explicit attributes, the classes
//! declared directly inside it and a parent back-reference by id.

use crate::{AttributeTable, CLASS_ATTR, ClassTable, NAME_ATTR, NodeId};

/// Attribute tree node
#[derive(Debug, Clone)]
pub struct AttrNode {
    /// Explicit attributes
    pub(crate) attributes: AttributeTable,
    /// Classes declared inside this node
    pub(crate) classes: ClassTable,
    /// Enclosing node (None for the root)
    pub(crate) parent: Option<NodeId>,
    /// Ordinary children in document order
    pub(crate) children: Vec<NodeId>,
    /// Implicit class name, the node's own tag
    pub(crate) default_class_name: String,
    /// Prefix of the `<key>class` attribute consulted for descendants
    pub(crate) child_class_key: String,
}

impl AttrNode {
    pub(crate) fn new(
        tag: &str,
        attributes: AttributeTable,
        parent: Option<NodeId>,
        child_class_key: &str,
    ) -> Self {
        Self {
            attributes,
            classes: ClassTable::new(),
            parent,
            children: Vec::new(),
            default_class_name: tag.to_string(),
            child_class_key: child_class_key.to_string(),
        }
    }

    #[inline]
    pub fn attributes(&self) -> &AttributeTable {
        &self.attributes
    }

    #[inline]
    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Ordinary children, class declarations excluded
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Tag name, also used as the node's implicit class
    #[inline]
    pub fn default_class_name(&self) -> &str {
        &self.default_class_name
    }

    #[inline]
    pub fn child_class_key(&self) -> &str {
        &self.child_class_key
    }

    /// Attribute naming the class inherited by descendants of this node
    pub fn child_class_attr(&self) -> String {
        format!("{}{}", self.child_class_key, CLASS_ATTR)
    }

    /// Value of the reserved `name` attribute, empty if absent
    pub fn name(&self) -> &str {
        self.attributes.get(NAME_ATTR).unwrap_or("")
    }

    /// Explicit attribute value
    #[inline]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// Raw `class` attribute value
    #[inline]
    pub fn class_list(&self) -> Option<&str> {
        self.attributes.get(CLASS_ATTR)
    }
}
