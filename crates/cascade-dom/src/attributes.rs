//! Attribute Table
//!
//! Explicit attributes of a single node. Filled once while the tree is
//! loaded; a repeated name overwrites the earlier value in place.

use std::collections::HashMap;

/// Attribute name/value table with O(1) lookup by name
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    entries: Vec<(String, String)>,
    by_name: HashMap<String, usize>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from name/value pairs, last write wins
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (name, value) in pairs {
            table.insert(name, value);
        }
        table
    }

    /// Get attribute value
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .and_then(|&i| self.entries.get(i))
            .map(|(_, value)| value.as_str())
    }

    /// Check if attribute exists
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Set attribute, returning the replaced value
    pub(crate) fn insert(&mut self, name: &str, value: &str) -> Option<String> {
        if let Some(&index) = self.by_name.get(name) {
            let old = std::mem::replace(&mut self.entries[index].1, value.to_string());
            Some(old)
        } else {
            self.by_name.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), value.to_string()));
            None
        }
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in first-declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over name/value pairs in first-declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
