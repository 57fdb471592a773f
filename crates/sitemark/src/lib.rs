//! # sitemark
//!
//! Convert Markdown documents to HTML.
//!
//! The pipeline splits a document into blocks, classifies each block,
//! tokenizes inline spans and assembles a validated
//! [`Node`](sitemark_core::Node) tree rooted at a `div`. Rendering the tree
//! yields the HTML string.
//!
//! ## Design
//!
//! ```text
//! document ──segment──▶ blocks ──classify──▶ BlockType
//!                                              │
//!                  spans ◀──tokenize── convert ┘──▶ Node tree ──render──▶ HTML
//! ```
//!
//! Only a small Markdown subset is understood: headings, fenced code,
//! quotes, flat lists, paragraphs and the inline spans bold, italic, code,
//! link and image.
//!
//! ## Example
//!
//! ```rust
//! use sitemark::convert;
//!
//! let root = convert("This is **bold** and *italic*").unwrap();
//! assert_eq!(
//!     root.to_string(),
//!     "<div><p>This is <b>bold</b> and <i>italic</i></p></div>"
//! );
//! ```

pub mod block;
mod convert;
pub mod inline;
pub mod page;
mod utilities;

pub use block::{classify, segment, BlockType};
pub use convert::{block_to_node, convert};
pub use inline::{tokenize, Span, SpanKind};
pub use page::{extract_title, fill_template, render_page, UNTITLED};
pub use sitemark_core::{render, Node, NodeError};

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unclosed delimiter `{delimiter}` in: {text}")]
    UnclosedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    #[error("Unterminated link or image marker in: {text}")]
    UnterminatedMarker { text: String },

    #[error(transparent)]
    InvalidNode(#[from] NodeError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
