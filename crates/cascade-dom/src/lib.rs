//! Cascade DOM - Attribute tree
//!
//! Arena-backed tree of attribute nodes. Every node carries its own explicit
//! attributes plus the named classes declared directly inside it. Class
//! definitions are ordinary arena nodes whose parent is the declaring node,
//! so class references are always resolved by name through the tree.

mod attributes;
mod classes;
mod classlist;
mod element;
mod node;
mod options;
mod tree;

pub use attributes::AttributeTable;
pub use classes::ClassTable;
pub use classlist::ClassList;
pub use element::{Element, ElementRole, SourceElement, is_special_tag};
pub use node::AttrNode;
pub use options::LoadOptions;
pub use tree::{AttrTree, Descendants};

/// Tag of a class declaration child
pub const CLASS_TAG: &str = "class";

/// Tag of a default-class declaration child, also its registered class name
pub const DEFAULT_CLASS: &str = "default";

/// Attribute holding a node's class list
pub const CLASS_ATTR: &str = "class";

/// Attribute holding a node's (or class declaration's) name
pub const NAME_ATTR: &str = "name";

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Arena index of this node
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tree errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
}
