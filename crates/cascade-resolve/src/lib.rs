//! Cascade Resolver
//!
//! Cascading attribute lookup over an [`AttrTree`](cascade_dom::AttrTree).
//!
//! A lookup on a node checks, in order:
//! 1. The node's own attributes
//! 2. The classes named by its `class` attribute
//! 3. On the outermost call only, the class named after its tag and then
//!    the enclosing `default` class
//!
//! Class names are resolved through the ancestor chain, one name at a time,
//! first listed class wins. Circular class references are cut by a depth
//! bound and read as a miss.
//!
//! # Example
//! ```rust
//! use cascade_dom::{AttrTree, Element};
//! use cascade_resolve::Resolver;
//!
//! let doc = Element::new("config")
//!     .child(Element::default_class().attr("a", "1"))
//!     .child(Element::new("item"));
//! let tree = AttrTree::load(&doc);
//! let item = tree.children(tree.root())[0];
//!
//! let resolver = Resolver::new(&tree);
//! assert_eq!(resolver.get_or(item, "a", "X"), "1");
//! ```

mod config;
mod convert;
mod resolver;

pub use config::{MAX_DEPTH, ResolverConfig};
pub use convert::FromAttr;
pub use resolver::Resolver;
