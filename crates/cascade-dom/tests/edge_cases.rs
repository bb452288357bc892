//! Edge case tests for cascade-dom

use cascade_dom::{AttrTree, ClassList, Element, NodeId, is_special_tag};

// ============================================================================
// DECLARATIONS
// ============================================================================

#[test]
fn test_class_with_empty_name_is_parsed_but_unregistered() {
    let elem = Element::new("root").child(
        Element::class("")
            .attr("x", "1")
            .child(Element::class("nested").attr("y", "2")),
    );
    let tree = AttrTree::load(&elem);

    assert!(tree.get(tree.root()).unwrap().classes().is_empty());
    // root, unnamed class, nested class
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_class_without_name_attribute() {
    let elem = Element::new("root").child(Element::new("class").attr("x", "1"));
    let tree = AttrTree::load(&elem);
    assert!(tree.get(tree.root()).unwrap().classes().is_empty());
}

#[test]
fn test_default_ignores_name_attribute() {
    let elem = Element::new("root").child(Element::default_class().attr("name", "other"));
    let tree = AttrTree::load(&elem);
    let classes = tree.get(tree.root()).unwrap().classes();

    assert!(classes.contains("default"));
    assert!(!classes.contains("other"));
}

#[test]
fn test_later_declaration_wins_within_one_element() {
    let elem = Element::new("root")
        .child(Element::class("a").attr("v", "1"))
        .child(Element::class("a").attr("v", "2"));
    let tree = AttrTree::load(&elem);
    let a = tree.get(tree.root()).unwrap().classes().get("a").unwrap();

    assert_eq!(tree.get(a).unwrap().attr("v"), Some("2"));
}

#[test]
fn test_root_element_named_class_is_still_root() {
    let tree = AttrTree::load(&Element::class("x"));
    assert_eq!(tree.len(), 1);
    assert!(tree.get(tree.root()).unwrap().is_root());
}

// ============================================================================
// LOOKUPS
// ============================================================================

#[test]
fn test_unknown_node_lookups() {
    let tree = AttrTree::load(&Element::new("root"));
    assert!(tree.get(NodeId::ROOT).is_some());
    assert!(tree.children(tree.root()).is_empty());
    assert_eq!(tree.descendants(tree.root()).count(), 1);
}

#[test]
fn test_deep_tree() {
    let mut elem = Element::new("leaf");
    for _ in 0..500 {
        elem = Element::new("level").child(elem);
    }
    let tree = AttrTree::load(&elem);
    assert_eq!(tree.len(), 501);
    assert_eq!(tree.descendants(tree.root()).count(), 501);
}

#[test]
fn test_class_list_and_special_tags() {
    assert!(is_special_tag("default"));
    assert!(!is_special_tag("defaults"));
    assert_eq!(ClassList::parse("a,b").length(), 2);
}
