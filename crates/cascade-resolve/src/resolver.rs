//! Cascading Resolver
//!
//! Every lookup is a recursion over (node, depth). Class references are
//! plain names resolved through the ancestor chain at call time, so the only
//! way to loop is through class definitions naming each other. A lookup
//! that re-enters itself is cut on the spot, and the depth bound caps
//! everything else; both read as a miss.

use crate::{FromAttr, ResolverConfig};
use cascade_dom::{AttrNode, AttrTree, ClassList, DEFAULT_CLASS, NodeId};
use std::collections::HashSet;

/// Attribute resolver over a loaded tree
///
/// Holds the tree by shared reference; any number of resolvers may serve
/// lookups concurrently once loading is done.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    tree: &'t AttrTree,
    max_depth: usize,
}

impl<'t> Resolver<'t> {
    pub fn new(tree: &'t AttrTree) -> Self {
        Self::with_config(tree, &ResolverConfig::default())
    }

    pub fn with_config(tree: &'t AttrTree, config: &ResolverConfig) -> Self {
        Self {
            tree,
            max_depth: config.max_depth,
        }
    }

    /// The tree being resolved against
    #[inline]
    pub fn tree(&self) -> &'t AttrTree {
        self.tree
    }

    /// Resolve an attribute, `None` when nothing in the cascade defines it
    pub fn get(&self, node: NodeId, name: &str) -> Option<&'t str> {
        self.get_at(node, name, 0, &mut ActivePath::default())
    }

    /// Resolve an attribute with a fallback value
    pub fn get_or<'a>(&self, node: NodeId, name: &str, default: &'a str) -> &'a str
    where
        't: 'a,
    {
        self.get(node, name).unwrap_or(default)
    }

    /// Resolve `name` against a list of class names as seen from `node`.
    /// Names are tried left to right; for each one the classes declared in
    /// `node` come before those of its ancestors.
    pub fn get_class_attribute(&self, node: NodeId, class_list: &str, name: &str) -> Option<&'t str> {
        self.class_attribute_at(node, class_list, name, 0, &mut ActivePath::default())
    }

    /// Check class membership, directly or through classes extending others
    pub fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.has_class_at(node, class_name, 0, &mut HashSet::new())
    }

    /// Find a class definition visible from `node`: its own class table
    /// first, then each ancestor's
    pub fn find_class(&self, node: NodeId, class_name: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            let n = self.tree.get(id)?;
            if let Some(class_id) = n.classes().get(class_name) {
                return Some(class_id);
            }
            current = n.parent();
        }
        None
    }

    /// Like [`find_class`](Self::find_class) starting at the parent, but
    /// falls back to `node` itself so callers always get an attribute
    /// source. A root always returns itself.
    pub fn get_class(&self, node: NodeId, class_name: &str) -> NodeId {
        self.tree
            .get(node)
            .and_then(|n| n.parent())
            .and_then(|parent| self.find_class(parent, class_name))
            .unwrap_or(node)
    }

    /// Value of the reserved `name` attribute, empty if absent
    pub fn name(&self, node: NodeId) -> &'t str {
        self.tree.get(node).map(|n| n.name()).unwrap_or("")
    }

    pub fn get_typed<T: FromAttr>(&self, node: NodeId, name: &str, default: T) -> T {
        T::from_attr(self.get(node, name), default)
    }

    pub fn get_i32(&self, node: NodeId, name: &str, default: i32) -> i32 {
        self.get_typed(node, name, default)
    }

    pub fn get_i64(&self, node: NodeId, name: &str, default: i64) -> i64 {
        self.get_typed(node, name, default)
    }

    pub fn get_u32(&self, node: NodeId, name: &str, default: u32) -> u32 {
        self.get_typed(node, name, default)
    }

    pub fn get_u64(&self, node: NodeId, name: &str, default: u64) -> u64 {
        self.get_typed(node, name, default)
    }

    pub fn get_f32(&self, node: NodeId, name: &str, default: f32) -> f32 {
        self.get_typed(node, name, default)
    }

    pub fn get_f64(&self, node: NodeId, name: &str, default: f64) -> f64 {
        self.get_typed(node, name, default)
    }

    pub fn get_bool(&self, node: NodeId, name: &str, default: bool) -> bool {
        self.get_typed(node, name, default)
    }

    fn exhausted(&self, depth: usize) -> bool {
        if depth >= self.max_depth {
            tracing::trace!("Resolution depth {} reached, treating as miss", depth);
            return true;
        }
        false
    }

    fn get_at(
        &self,
        id: NodeId,
        name: &str,
        depth: usize,
        path: &mut ActivePath,
    ) -> Option<&'t str> {
        if self.exhausted(depth) {
            return None;
        }
        let node = self.tree.get(id)?;

        // Local values always win
        if let Some(value) = node.attr(name) {
            return Some(value);
        }

        let parent = node.parent()?;
        if !path.enter(id, name) {
            tracing::trace!("Lookup of {} on {} already in progress, treating as miss", name, id);
            return None;
        }
        let value = self.cascade_at(node, parent, name, depth, path);
        path.leave();
        value
    }

    fn cascade_at(
        &self,
        node: &'t AttrNode,
        parent: NodeId,
        name: &str,
        depth: usize,
        path: &mut ActivePath,
    ) -> Option<&'t str> {
        if let Some(class_list) = node.class_list() {
            let value = self.class_attribute_at(parent, class_list, name, depth + 1, path);
            if value.is_some() {
                return value;
            }
        }

        // Implicit classes only apply to the outermost lookup, never while
        // already resolving through a class
        if depth == 0 {
            if let Some(value) =
                self.class_attribute_at(parent, node.default_class_name(), name, depth + 1, path)
            {
                return Some(value);
            }
            return self.class_attribute_at(parent, DEFAULT_CLASS, name, depth + 1, path);
        }

        None
    }

    fn class_attribute_at(
        &self,
        id: NodeId,
        class_list: &str,
        name: &str,
        depth: usize,
        path: &mut ActivePath,
    ) -> Option<&'t str> {
        if self.exhausted(depth) {
            return None;
        }
        let node = self.tree.get(id)?;

        for class_name in ClassList::parse(class_list).iter() {
            if let Some(class_id) = node.classes().get(class_name) {
                if let Some(value) = self.get_at(class_id, name, depth + 1, path) {
                    return Some(value);
                }
            }
            if let Some(parent) = node.parent() {
                let value = self.class_attribute_at(parent, class_name, name, depth + 1, path);
                if value.is_some() {
                    return value;
                }
            }
        }

        // A container may name the class its descendants inherit
        let parent = node.parent()?;
        let inherited = self.get_at(id, &node.child_class_attr(), depth + 1, path)?;
        if inherited.is_empty() {
            return None;
        }
        self.class_attribute_at(parent, inherited, name, depth + 1, path)
    }

    fn has_class_at(
        &self,
        id: NodeId,
        class_name: &str,
        depth: usize,
        visited: &mut HashSet<NodeId>,
    ) -> bool {
        if self.exhausted(depth) {
            return false;
        }
        let Some(node) = self.tree.get(id) else {
            return false;
        };
        if depth == 0 && node.default_class_name() == class_name {
            return true;
        }
        let Some(class_list) = node.class_list() else {
            return false;
        };

        // A class already searched for this name cannot match on a second visit
        ClassList::parse(class_list).iter().any(|token| {
            token == class_name
                || self.find_class(id, token).is_some_and(|class_id| {
                    visited.insert(class_id)
                        && self.has_class_at(class_id, class_name, depth + 1, visited)
                })
        })
    }
}

/// Lookups on the current recursion path, as (node, attribute name).
/// Entering one that is already on the path can only repeat the search in
/// progress, so it reads as a miss.
#[derive(Debug, Default)]
struct ActivePath {
    entries: Vec<(NodeId, String)>,
}

impl ActivePath {
    fn enter(&mut self, id: NodeId, name: &str) -> bool {
        if self.entries.iter().any(|(entry, attr)| *entry == id && attr == name) {
            return false;
        }
        self.entries.push((id, name.to_string()));
        true
    }

    fn leave(&mut self) {
        self.entries.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_dom::Element;

    fn first_child(tree: &AttrTree, id: NodeId) -> NodeId {
        tree.children(id)[0]
    }

    #[test]
    fn test_local_always_wins() {
        let doc = Element::new("root")
            .child(Element::default_class().attr("a", "default"))
            .child(Element::class("c").attr("a", "class"))
            .child(Element::new("item").attr("class", "c").attr("a", "local"));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());

        assert_eq!(Resolver::new(&tree).get_or(item, "a", "X"), "local");
    }

    #[test]
    fn test_root_miss_returns_default() {
        let doc = Element::new("root")
            .attr("class", "c")
            .child(Element::class("c").attr("a", "1"))
            .child(Element::default_class().attr("a", "2"));
        let tree = AttrTree::load(&doc);
        let resolver = Resolver::new(&tree);

        assert_eq!(resolver.get_or(tree.root(), "a", "D"), "D");
        assert_eq!(resolver.get(tree.root(), "a"), None);
    }

    #[test]
    fn test_first_listed_class_wins() {
        let doc = Element::new("root")
            .child(Element::class("a").attr("x", "from-a"))
            .child(Element::class("b").attr("x", "from-b").attr("y", "only-b"))
            .child(Element::new("item").attr("class", "a,b"));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());
        let resolver = Resolver::new(&tree);

        assert_eq!(resolver.get(item, "x"), Some("from-a"));
        assert_eq!(resolver.get(item, "y"), Some("only-b"));
    }

    #[test]
    fn test_cycle_terminates() {
        let doc = Element::new("root")
            .child(Element::class("a").attr("class", "b"))
            .child(Element::class("b").attr("class", "a"))
            .child(Element::new("item").attr("class", "a"));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());

        assert_eq!(Resolver::new(&tree).get_or(item, "missing", "D"), "D");
    }

    #[test]
    fn test_has_class_transitive() {
        let doc = Element::new("root")
            .child(Element::class("a").attr("class", "b"))
            .child(Element::class("b"))
            .child(Element::new("item").attr("class", "a"));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());
        let resolver = Resolver::new(&tree);

        assert!(resolver.has_class(item, "a"));
        assert!(resolver.has_class(item, "b"));
        assert!(resolver.has_class(item, "item"));
        assert!(!resolver.has_class(item, "c"));
    }

    #[test]
    fn test_default_class_round_trip() {
        let doc = Element::new("root")
            .child(Element::default_class().attr("a", "1"))
            .child(Element::new("item").child(Element::new("item")));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());
        let grandchild = first_child(&tree, item);
        let resolver = Resolver::new(&tree);

        assert_eq!(resolver.get_or(item, "a", "X"), "1");
        assert_eq!(resolver.get_or(grandchild, "a", "X"), "1");
    }

    #[test]
    fn test_find_class_and_get_class() {
        let doc = Element::new("root")
            .child(Element::class("a").attr("v", "1"))
            .child(Element::new("item"));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());
        let class_a = tree.get(tree.root()).unwrap().classes().get("a").unwrap();
        let resolver = Resolver::new(&tree);

        assert_eq!(resolver.find_class(item, "a"), Some(class_a));
        assert_eq!(resolver.find_class(item, "zz"), None);
        assert_eq!(resolver.get_class(item, "a"), class_a);
        assert_eq!(resolver.get_class(item, "zz"), item);
        assert_eq!(resolver.get_class(tree.root(), "a"), tree.root());
    }

    #[test]
    fn test_typed_accessors() {
        let doc = Element::new("root")
            .child(Element::default_class().attr("n", "12").attr("f", "2.5").attr("b", "true"))
            .child(Element::new("item").attr("bad", "x1"));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());
        let resolver = Resolver::new(&tree);

        assert_eq!(resolver.get_i32(item, "n", 0), 12);
        assert_eq!(resolver.get_u64(item, "n", 0), 12);
        assert_eq!(resolver.get_f64(item, "f", 0.0), 2.5);
        assert!(resolver.get_bool(item, "b", false));
        assert_eq!(resolver.get_i64(item, "bad", -1), -1);
        assert_eq!(resolver.get_u32(item, "missing", 7), 7);
    }

    #[test]
    fn test_name_accessor() {
        let doc = Element::new("root").child(Element::new("item").attr("name", "save"));
        let tree = AttrTree::load(&doc);
        let item = first_child(&tree, tree.root());
        let resolver = Resolver::new(&tree);

        assert_eq!(resolver.name(item), "save");
        assert_eq!(resolver.name(tree.root()), "");
    }
}
