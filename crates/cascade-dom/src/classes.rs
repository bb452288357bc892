//! Class Table
//!
//! Classes declared directly inside a node, keyed by class name. The
//! literal `default` key only ever comes from `<default>` declarations.

use crate::NodeId;
use std::collections::HashMap;

/// Mapping from class name to the class definition node
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    classes: HashMap<String, NodeId>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a class definition by name
    #[inline]
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.classes.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Register a class; a redeclared name replaces the earlier definition
    pub(crate) fn insert(&mut self, name: &str, node: NodeId) -> Option<NodeId> {
        self.classes.insert(name.to_string(), node)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Declared class names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.classes.iter().map(|(name, &id)| (name.as_str(), id))
    }
}
