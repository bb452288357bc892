//! Attribute Tree (arena-based allocation)
//!
//! Nodes are owned top-down by the arena. Class definitions are stored as
//! regular nodes whose parent is the declaring node and are reachable only
//! through the declaring node's class table.

use crate::{
    AttrNode, AttributeTable, DEFAULT_CLASS, ElementRole, LoadOptions, NAME_ATTR, NodeId,
    SourceElement, TreeError,
};
use std::collections::BTreeSet;

/// Arena-based attribute tree
#[derive(Debug, Clone, Default)]
pub struct AttrTree {
    nodes: Vec<AttrNode>,
    options: LoadOptions,
}

impl AttrTree {
    /// Build a tree from a root element with default options
    pub fn load<E: SourceElement>(root: &E) -> Self {
        Self::load_with_options(root, LoadOptions::default())
    }

    /// Build a tree from a root element
    pub fn load_with_options<E: SourceElement>(root: &E, options: LoadOptions) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            options,
        };
        tree.build_node(root, None);
        tracing::debug!(
            "Loaded attribute tree <{}> with {} nodes",
            root.tag_name(),
            tree.len()
        );
        tree
    }

    /// Root node ID
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&AttrNode> {
        self.nodes.get(id.index())
    }

    /// Ordinary children of a node
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(AttrNode::children).unwrap_or(&[])
    }

    /// Ordinary nodes below `id` in pre-order, `id` first
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.get(id).is_some() { vec![(id, 0)] } else { Vec::new() };
        Descendants { tree: self, stack }
    }

    /// Number of nodes in the arena, class definitions included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Options the tree was built with
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Every attribute name declared anywhere in the tree, sorted
    pub fn attribute_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .nodes
            .iter()
            .flat_map(|node| node.attributes.names())
            .collect();
        names.into_iter().collect()
    }

    /// Merge the class and default declarations found in `element` into the
    /// class table of `node`. A redeclared class name replaces the earlier
    /// definition; existing attributes are untouched.
    pub fn load_class<E: SourceElement>(&mut self, node: NodeId, element: &E) -> Result<(), TreeError> {
        if self.get(node).is_none() {
            return Err(TreeError::UnknownNode(node));
        }
        let before = self.len();
        self.ingest_classes(node, element);
        tracing::debug!(
            "Loaded classes from <{}> into {}: {} new nodes",
            element.tag_name(),
            node,
            self.len() - before
        );
        Ok(())
    }

    fn build_node<E: SourceElement>(&mut self, element: &E, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let tag = element.tag_name();
        let attributes = AttributeTable::from_pairs(element.attributes());
        let key = self.options.child_class_key(tag).to_string();
        self.nodes.push(AttrNode::new(tag, attributes, parent, &key));

        self.ingest_classes(id, element);

        for child in element.children() {
            if child.role() == ElementRole::Ordinary {
                let child_id = self.build_node(child, Some(id));
                self.nodes[id.index()].children.push(child_id);
            }
        }
        id
    }

    fn ingest_classes<E: SourceElement>(&mut self, owner: NodeId, element: &E) {
        for child in element.children() {
            let name = match child.role() {
                ElementRole::Ordinary => continue,
                ElementRole::Default => DEFAULT_CLASS.to_string(),
                ElementRole::Class => child.attribute(NAME_ATTR).unwrap_or("").to_string(),
            };

            let class_id = self.build_node(child, Some(owner));
            if name.is_empty() {
                tracing::debug!("Skipping unnamed class declaration in {}", owner);
                continue;
            }
            if let Some(previous) = self.nodes[owner.index()].classes.insert(&name, class_id) {
                tracing::trace!("Class '{}' in {} redeclared (was {})", name, owner, previous);
            }
        }
    }
}

/// Pre-order iterator over ordinary nodes
pub struct Descendants<'a> {
    tree: &'a AttrTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Descendants<'a> {
    /// Pair every node with its depth below the starting node
    pub fn with_depth(mut self) -> impl Iterator<Item = (NodeId, usize)> + 'a {
        std::iter::from_fn(move || self.advance())
    }

    fn advance(&mut self) -> Option<(NodeId, usize)> {
        let (id, depth) = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().map(|&child| (child, depth + 1)));
        Some((id, depth))
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.advance().map(|(id, _)| id)
    }
}
