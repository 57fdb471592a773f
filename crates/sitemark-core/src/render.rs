//! HTML rendering
//!
//! Converts a node tree into an HTML string.

use crate::node::{Attributes, Leaf, Node, Parent, IMAGE_TAG};

/// Render a node tree to an HTML string
pub fn render(node: &Node) -> String {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output);
    output
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, out),
        Node::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &Leaf, out: &mut String) {
    let Some(tag) = leaf.tag() else {
        out.push_str(leaf.value());
        return;
    };

    out.push('<');
    out.push_str(tag);
    render_attributes(leaf.attributes(), out);

    if tag == IMAGE_TAG {
        out.push_str("/>");
        return;
    }

    out.push('>');
    out.push_str(leaf.value());
    push_closing_tag(tag, out);
}

fn render_parent(parent: &Parent, out: &mut String) {
    out.push('<');
    out.push_str(parent.tag());
    render_attributes(parent.attributes(), out);
    out.push('>');

    for child in parent.children() {
        render_node(child, out);
    }

    push_closing_tag(parent.tag(), out);
}

/// Attribute values are written as given; embedded quotes are not escaped.
fn render_attributes(attributes: &Attributes, out: &mut String) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn push_closing_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text() {
        let node = Node::text("Hello world").unwrap();
        assert_eq!(render(&node), "Hello world");
    }

    #[test]
    fn test_tagged_leaf() {
        let node = Node::element("b", "bold").unwrap();
        assert_eq!(render(&node), "<b>bold</b>");
    }

    #[test]
    fn test_leaf_attributes() {
        let node = Node::element_with_attrs(
            "a",
            "anchor text",
            vec![("href", "https://www.google.com"), ("target", "_blank")],
        )
        .unwrap();
        assert_eq!(
            render(&node),
            "<a href=\"https://www.google.com\" target=\"_blank\">anchor text</a>"
        );
    }

    #[test]
    fn test_image_self_closes() {
        let node = Node::image("a.png", "pic");
        assert_eq!(render(&node), "<img src=\"a.png\" alt=\"pic\"/>");
    }

    #[test]
    fn test_nested_parents() {
        let items = vec![
            Node::parent("li", vec![Node::text("a").unwrap()]).unwrap(),
            Node::parent(
                "li",
                vec![Node::text("b ").unwrap(), Node::element("i", "c").unwrap()],
            )
            .unwrap(),
        ];
        let list = Node::parent("ul", items).unwrap();
        assert_eq!(render(&list), "<ul><li>a</li><li>b <i>c</i></li></ul>");
    }

    #[test]
    fn test_parent_attributes() {
        let mut attributes = Attributes::new();
        attributes.insert("class".to_string(), "note".to_string());
        let parent = Parent::new("div", vec![Node::text("x").unwrap()], attributes).unwrap();
        assert_eq!(render(&Node::Parent(parent)), "<div class=\"note\">x</div>");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let node = Node::element_with_attrs("a", "q", vec![("title", "say \"hi\"")]).unwrap();
        assert_eq!(render(&node), "<a title=\"say \"hi\"\">q</a>");
    }

    #[test]
    fn test_display_renders() {
        let node = Node::parent("p", vec![Node::text("hi").unwrap()]).unwrap();
        assert_eq!(node.to_string(), "<p>hi</p>");
    }
}
