//! sitemark-core - HTML node tree and rendering
//!
//! This crate provides the validated element tree that the `sitemark`
//! Markdown pipeline builds, and the renderer that turns it into an HTML
//! string.
//!
//! # Architecture
//!
//! ```text
//!                     ┌──────────────────────┐
//! Markdown ──parse──▶ │ Node (Leaf | Parent) │ ──render──▶ HTML String
//!                     └──────────────────────┘
//! ```
//!
//! Nodes are checked when they are built: a leaf needs a value, a parent
//! needs a tag and at least one child. A tree that exists can always be
//! rendered.
//!
//! # Example
//!
//! ```rust
//! use sitemark_core::{render, Node};
//!
//! let heading = Node::parent(
//!     "h1",
//!     vec![
//!         Node::text("Hello ").unwrap(),
//!         Node::element("b", "World").unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(render(&heading), "<h1>Hello <b>World</b></h1>");
//! ```

mod node;
mod render;

pub use node::{Attributes, Leaf, Node, Parent};
pub use render::render;

/// Error raised when a node would break the tree invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("Invalid node: {0}")]
    InvalidNode(String),
}

pub type Result<T> = std::result::Result<T, NodeError>;
