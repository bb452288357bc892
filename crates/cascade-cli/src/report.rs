//! Per-node resolution reports

use cascade_dom::{AttrTree, CLASS_ATTR, NAME_ATTR};
use cascade_resolve::Resolver;
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolved values for one ordinary node
#[derive(Debug, Serialize, PartialEq)]
pub struct NodeReport {
    pub depth: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub values: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_class: Option<bool>,
}

/// Attribute names worth resolving when none were requested
pub fn default_attrs(tree: &AttrTree) -> Vec<String> {
    tree.attribute_names()
        .into_iter()
        .filter(|name| *name != CLASS_ATTR && *name != NAME_ATTR)
        .map(str::to_string)
        .collect()
}

/// Resolve `attrs` on every ordinary node, pre-order
pub fn build(resolver: &Resolver<'_>, attrs: &[String], class: Option<&str>) -> Vec<NodeReport> {
    let tree = resolver.tree();
    tree.descendants(tree.root())
        .with_depth()
        .filter_map(|(id, depth)| {
            let node = tree.get(id)?;
            let values = attrs
                .iter()
                .filter_map(|attr| {
                    resolver
                        .get(id, attr)
                        .map(|value| (attr.clone(), value.to_string()))
                })
                .collect();

            Some(NodeReport {
                depth,
                tag: node.default_class_name().to_string(),
                name: resolver.name(id).to_string(),
                values,
                has_class: class.map(|c| resolver.has_class(id, c)),
            })
        })
        .collect()
}

/// Indented text rendering
pub fn render_text(reports: &[NodeReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let indent = "  ".repeat(report.depth);
        out.push_str(&format!("{indent}<{}>", report.tag));
        if !report.name.is_empty() {
            out.push_str(&format!(" \"{}\"", report.name));
        }
        if let Some(has) = report.has_class {
            out.push_str(&format!(" [class: {has}]"));
        }
        out.push('\n');
        for (attr, value) in &report.values {
            out.push_str(&format!("{indent}  {attr} = {value}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_dom::Element;

    fn tree() -> AttrTree {
        AttrTree::load(
            &Element::new("root")
                .child(Element::default_class().attr("color", "gray"))
                .child(Element::class("big").attr("size", "20"))
                .child(Element::new("item").attr("name", "a").attr("class", "big")),
        )
    }

    #[test]
    fn test_default_attrs_skip_reserved() {
        assert_eq!(default_attrs(&tree()), vec!["color", "size"]);
    }

    #[test]
    fn test_build_reports() {
        let tree = tree();
        let resolver = Resolver::new(&tree);
        let reports = build(&resolver, &default_attrs(&tree), Some("big"));

        assert_eq!(reports.len(), 2);
        assert!(reports[0].values.is_empty());
        assert_eq!(reports[0].has_class, Some(false));

        let item = &reports[1];
        assert_eq!(item.depth, 1);
        assert_eq!(item.name, "a");
        assert_eq!(item.values.get("color").map(String::as_str), Some("gray"));
        assert_eq!(item.values.get("size").map(String::as_str), Some("20"));
        assert_eq!(item.has_class, Some(true));
    }

    #[test]
    fn test_render_text() {
        let tree = tree();
        let resolver = Resolver::new(&tree);
        let text = render_text(&build(&resolver, &["size".to_string()], None));

        assert_eq!(text, "<root>\n  <item> \"a\"\n    size = 20\n");
    }

    #[test]
    fn test_nested_depths_and_class_flag() {
        let tree = AttrTree::load(
            &Element::new("root")
                .child(Element::class("big").attr("size", "20"))
                .child(
                    Element::new("panel")
                        .child(Element::new("item").attr("class", "big"))
                        .child(Element::new("item")),
                )
                .child(Element::new("footer")),
        );
        let resolver = Resolver::new(&tree);
        let reports = build(&resolver, &["size".to_string()], Some("big"));

        let depths: Vec<usize> = reports.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 1]);
        assert_eq!(reports[4].tag, "footer");

        let text = render_text(&reports);
        assert_eq!(
            text,
            "<root> [class: false]\n  <panel> [class: false]\n    <item> [class: true]\n      size = 20\n    <item> [class: false]\n  <footer> [class: false]\n"
        );
    }
}
