//! Convert classified blocks into HTML nodes
//!
//! Every block becomes one node subtree. Inline content is tokenized into
//! spans and turned into leaves; code blocks are kept verbatim.

use log::{debug, trace};
use sitemark_core::Node;

use crate::block::{classify, segment, BlockType};
use crate::inline::inline_nodes;
use crate::utilities::{is_fence, leading_whitespace, skip_columns, strip_list_marker, ListKind};
use crate::Result;

/// Convert a Markdown document to a node tree rooted at a `div`.
///
/// Fails with [`ConvertError::InvalidNode`](crate::ConvertError::InvalidNode)
/// when the document has no content, since a `div` needs at least one child.
pub fn convert(document: &str) -> Result<Node> {
    let blocks = segment(document.trim());
    debug!("segmented document into {} blocks", blocks.len());

    let mut children = Vec::with_capacity(blocks.len());
    for block in &blocks {
        if let Some(node) = block_to_node(block)? {
            children.push(node);
        }
    }

    Ok(Node::parent("div", children)?)
}

/// Convert a single block to a node.
///
/// Returns `None` when the block carries no content, e.g. an empty fenced
/// block.
pub fn block_to_node(block: &str) -> Result<Option<Node>> {
    let block_type = classify(block);
    trace!("classified block as {block_type:?}: {block:?}");

    match block_type {
        BlockType::Heading(level) => convert_heading(block, level),
        BlockType::Code => convert_code(block),
        BlockType::Quote => convert_quote(block),
        BlockType::UnorderedList => convert_list(block, ListKind::Unordered),
        BlockType::OrderedList => convert_list(block, ListKind::Ordered),
        BlockType::Paragraph => convert_paragraph(block),
    }
}

fn convert_heading(block: &str, level: u8) -> Result<Option<Node>> {
    let first_line = block.trim_start().lines().next().unwrap_or_default();
    let text = first_line.trim_start().trim_start_matches('#');
    let text = text.strip_prefix(' ').unwrap_or(text).trim();

    wrap(&format!("h{level}"), inline_nodes(text)?)
}

fn convert_code(block: &str) -> Result<Option<Node>> {
    let lines: Vec<&str> = block.lines().collect();

    // The opening fence is always the first line
    let mut body = lines.get(1..).unwrap_or_default();
    if let Some((last, rest)) = body.split_last() {
        if is_fence(last) {
            body = rest;
        }
    }

    let code = normalize_code_indentation(body);
    if code.trim().is_empty() {
        debug!("skipping empty code block");
        return Ok(None);
    }

    Ok(Some(Node::element("code", &code)?))
}

/// Strip the indentation shared by all non-blank lines
fn normalize_code_indentation(lines: &[&str]) -> String {
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                skip_columns(line, indent)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn convert_quote(block: &str) -> Result<Option<Node>> {
    let text = block
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('>').unwrap_or(line).trim()
        })
        .collect::<Vec<_>>()
        .join("\n");

    wrap("blockquote", inline_nodes(&text)?)
}

fn convert_list(block: &str, kind: ListKind) -> Result<Option<Node>> {
    let mut items = Vec::new();

    for line in block.lines().filter(|line| !line.trim().is_empty()) {
        let content = strip_list_marker(line, kind);
        if let Some(item) = wrap("li", inline_nodes(content)?)? {
            items.push(item);
        }
    }

    wrap(kind.tag(), items)
}

/// A paragraph holding a single image and nothing but whitespace renders as
/// the bare image.
fn convert_paragraph(block: &str) -> Result<Option<Node>> {
    let nodes = inline_nodes(block)?;

    let is_image = |node: &Node| node.tag() == Some("img");
    let image_count = nodes.iter().filter(|&node| is_image(node)).count();
    if image_count == 1 && nodes.iter().all(|node| is_image(node) || node.is_blank_text()) {
        return Ok(nodes.into_iter().find(is_image));
    }

    wrap("p", nodes)
}

/// Wrap children in a parent, or yield nothing when there are none
fn wrap(tag: &str, children: Vec<Node>) -> Result<Option<Node>> {
    if children.is_empty() {
        debug!("skipping empty <{tag}>");
        return Ok(None);
    }
    Ok(Some(Node::parent(tag, children)?))
}
