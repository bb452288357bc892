//! Tree load options

use std::collections::HashMap;

/// Options applied while building an [`AttrTree`](crate::AttrTree)
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Child class key per tag name. A container tagged `menu` mapped to
    /// `item` lets descendants inherit the class named by its `itemclass`
    /// attribute.
    pub child_class_keys: HashMap<String, String>,

    /// Key used for tags without an entry in `child_class_keys`
    pub default_child_class_key: String,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: map a tag to its child class key
    pub fn with_child_class_key(mut self, tag: impl Into<String>, key: impl Into<String>) -> Self {
        self.child_class_keys.insert(tag.into(), key.into());
        self
    }

    /// Child class key for a node with the given tag
    pub fn child_class_key(&self, tag: &str) -> &str {
        self.child_class_keys
            .get(tag)
            .map(String::as_str)
            .unwrap_or(&self.default_child_class_key)
    }
}
