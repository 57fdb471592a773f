//! HTML node tree
//!
//! This module defines the two kinds of node the renderer understands.
//! A [`Leaf`] carries a value and never owns children; a [`Parent`] owns an
//! ordered, non-empty list of children. Fields are private so a node cannot
//! be changed once it has passed validation.

use std::fmt;

use indexmap::IndexMap;

use crate::{NodeError, Result};

/// Ordered attribute map; entries render in insertion order
pub type Attributes = IndexMap<String, String>;

/// The only element allowed to render without a value
pub(crate) const IMAGE_TAG: &str = "img";

/// An HTML element tree node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal element or bare text
    Leaf(Leaf),

    /// Element owning child nodes
    Parent(Parent),
}

/// A terminal node: optional tag, a value and attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

/// An element that owns at least one child
#[derive(Debug, Clone, PartialEq)]
pub struct Parent {
    tag: String,
    children: Vec<Node>,
    attributes: Attributes,
}

impl Leaf {
    /// Build a leaf. The value must be non-empty unless the tag is `img`.
    pub fn new(tag: Option<&str>, value: impl Into<String>, attributes: Attributes) -> Result<Self> {
        let value = value.into();

        if tag == Some("") {
            return Err(NodeError::InvalidNode(
                "leaf tag must be absent or non-empty".to_string(),
            ));
        }

        if value.is_empty() && tag != Some(IMAGE_TAG) {
            return Err(NodeError::InvalidNode(format!(
                "leaf <{}> was not given a value",
                tag.unwrap_or("text")
            )));
        }

        Ok(Self {
            tag: tag.map(str::to_string),
            value,
            attributes,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Parent {
    /// Build a parent. Fails when the tag is empty or there are no children.
    pub fn new(tag: &str, children: Vec<Node>, attributes: Attributes) -> Result<Self> {
        if tag.is_empty() {
            return Err(NodeError::InvalidNode(
                "parent node requires a tag".to_string(),
            ));
        }

        if children.is_empty() {
            return Err(NodeError::InvalidNode(format!(
                "parent <{tag}> was not given any children"
            )));
        }

        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl Node {
    /// Create an untagged text leaf
    pub fn text(value: &str) -> Result<Self> {
        Leaf::new(None, value, Attributes::new()).map(Node::Leaf)
    }

    /// Create a tagged leaf without attributes
    pub fn element(tag: &str, value: &str) -> Result<Self> {
        Leaf::new(Some(tag), value, Attributes::new()).map(Node::Leaf)
    }

    /// Create a tagged leaf with attributes
    pub fn element_with_attrs(tag: &str, value: &str, attrs: Vec<(&str, &str)>) -> Result<Self> {
        Leaf::new(Some(tag), value, collect_attrs(attrs)).map(Node::Leaf)
    }

    /// Create a self-closing `img` leaf
    pub fn image(src: &str, alt: &str) -> Self {
        Node::Leaf(Leaf {
            tag: Some(IMAGE_TAG.to_string()),
            value: String::new(),
            attributes: collect_attrs(vec![("src", src), ("alt", alt)]),
        })
    }

    /// Create a parent without attributes
    pub fn parent(tag: &str, children: Vec<Node>) -> Result<Self> {
        Parent::new(tag, children, Attributes::new()).map(Node::Parent)
    }

    /// Create a node from loose parts.
    ///
    /// A present value selects a leaf, which must not be handed children.
    /// Without a value the parts describe a parent.
    pub fn from_parts(
        tag: Option<&str>,
        value: Option<&str>,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Result<Self> {
        match value {
            Some(_) if !children.is_empty() => Err(NodeError::InvalidNode(format!(
                "leaf <{}> was passed {} children",
                tag.unwrap_or("text"),
                children.len()
            ))),
            Some(value) => Leaf::new(tag, value, attributes).map(Node::Leaf),
            None => Parent::new(tag.unwrap_or_default(), children, attributes).map(Node::Parent),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Get the tag, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Get the value of a leaf
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => Some(leaf.value()),
            Node::Parent(_) => None,
        }
    }

    /// Get child nodes (always empty for a leaf)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => parent.children(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf(leaf) => leaf.attributes(),
            Node::Parent(parent) => parent.attributes(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Check if this is untagged text made only of whitespace
    pub fn is_blank_text(&self) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.tag.is_none() && leaf.value.trim().is_empty(),
            Node::Parent(_) => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(self))
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
