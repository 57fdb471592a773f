//! Block segmentation and classification
//!
//! A document is cut into blocks: runs of non-blank lines, or one fenced
//! code run. Headings always start a fresh block, and so does every switch
//! between list items and other lines (or between ordered and unordered
//! items). Each block is then given exactly one [`BlockType`].

use crate::utilities::{heading_level, is_fence, is_list_block, list_kind, ListKind, FENCE};

/// Structural type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Heading with level 1-6
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks in document order
pub fn segment(document: &str) -> Vec<String> {
    document
        .lines()
        .fold(Segmenter::default(), Segmenter::push_line)
        .finish()
}

/// Accumulator threaded through the segmentation fold
#[derive(Default)]
struct Segmenter<'a> {
    blocks: Vec<String>,
    current: Vec<&'a str>,
    in_code: bool,
}

impl<'a> Segmenter<'a> {
    fn push_line(self, line: &'a str) -> Self {
        if is_fence(line) {
            return self.toggle_code(line);
        }

        if self.in_code {
            return self.append(line);
        }

        if line.trim().is_empty() {
            return self.close();
        }

        if self.starts_new_block(line) {
            self.close().append(line)
        } else {
            self.append(line)
        }
    }

    /// An opening fence closes the open block, a closing fence ends the code block
    fn toggle_code(self, line: &'a str) -> Self {
        if self.in_code {
            let mut segmenter = self.append(line).close();
            segmenter.in_code = false;
            segmenter
        } else {
            let mut segmenter = self.close();
            segmenter.in_code = true;
            segmenter.append(line)
        }
    }

    fn starts_new_block(&self, line: &str) -> bool {
        if heading_level(line).is_some() {
            return true;
        }

        match self.current.last() {
            Some(previous) => list_kind(previous) != list_kind(line),
            None => false,
        }
    }

    fn append(mut self, line: &'a str) -> Self {
        self.current.push(line);
        self
    }

    fn close(mut self) -> Self {
        if !self.current.is_empty() {
            let block = std::mem::take(&mut self.current).join("\n");
            self.blocks.push(block);
        }
        self
    }

    fn finish(self) -> Vec<String> {
        self.close()
            .blocks
            .into_iter()
            .map(|block| block.trim().to_string())
            .filter(|block| !block.is_empty())
            .collect()
    }
}

/// Classify a block. Always succeeds; anything unrecognised is a paragraph.
pub fn classify(block: &str) -> BlockType {
    if block.trim().is_empty() {
        return BlockType::Paragraph;
    }

    let first_line = block.trim_start().lines().next().unwrap_or_default();
    if let Some(level) = heading_level(first_line) {
        return BlockType::Heading(level);
    }

    if is_code_block(block) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        BlockType::Quote
    } else if is_list_block(&lines, ListKind::Unordered) {
        BlockType::UnorderedList
    } else if is_list_block(&lines, ListKind::Ordered) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

fn is_code_block(block: &str) -> bool {
    let trimmed = block.trim();
    trimmed.lines().count() >= 2 && trimmed.starts_with(FENCE) && trimmed.ends_with(FENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_single_block() {
        assert_eq!(
            segment("This is a single block of text."),
            vec!["This is a single block of text."]
        );
    }

    #[test]
    fn test_blank_lines_separate_blocks() {
        let blocks = segment("  This is the first block.  \n\n\n  This is the second block.  ");
        assert_eq!(blocks, vec!["This is the first block.", "This is the second block."]);
    }

    #[test]
    fn test_empty_document() {
        assert!(segment("\n\n").is_empty());
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_mixed_document() {
        let markdown = "# This is a heading\n\nThis is a paragraph of text. It has some **bold** and *italic* words inside of it.\n\n* This is the first list item in a list block\n* This is a list item\n* This is another list item";
        assert_eq!(
            segment(markdown),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item\n* This is another list item",
            ]
        );
    }

    #[test]
    fn test_heading_starts_new_block() {
        let blocks = segment("intro line\n## Section\nbody");
        assert_eq!(blocks, vec!["intro line", "## Section\nbody"]);
    }

    #[test]
    fn test_list_transitions_split_blocks() {
        let blocks = segment("Some text\n- a\n- b\n1. one\n2. two\nafter");
        assert_eq!(blocks, vec!["Some text", "- a\n- b", "1. one\n2. two", "after"]);
    }

    #[test]
    fn test_code_fence_keeps_blank_lines() {
        let markdown = "before\n```\nfn main() {\n\n    # not a heading\n}\n```\nafter";
        assert_eq!(
            segment(markdown),
            vec![
                "before",
                "```\nfn main() {\n\n    # not a heading\n}\n```",
                "after",
            ]
        );
    }

    #[test]
    fn test_code_fence_with_info_string() {
        let blocks = segment("```rust\nlet x = 1;\n```");
        assert_eq!(blocks, vec!["```rust\nlet x = 1;\n```"]);
    }

    #[test]
    fn test_leading_indentation_and_blank_lines_are_ignored() {
        let plain = segment("first\n\nsecond");
        let padded = segment("\n\n  first\n\n  second\n\n");
        assert_eq!(plain, padded);
    }

    #[rstest]
    #[case("# One", BlockType::Heading(1))]
    #[case("### Three", BlockType::Heading(3))]
    #[case("###### Six", BlockType::Heading(6))]
    #[case("####### Seven", BlockType::Paragraph)]
    #[case("```\ncode block\n```", BlockType::Code)]
    #[case("```python\ncode block\n```", BlockType::Code)]
    #[case("```", BlockType::Paragraph)]
    #[case("> This is a quote", BlockType::Quote)]
    #[case(">This is a quote\n  > with mixed indentation", BlockType::Quote)]
    #[case("* Item 1\n- Item 2", BlockType::UnorderedList)]
    #[case("1. First\n3. Third\n10. Tenth", BlockType::OrderedList)]
    #[case("1.Missing space", BlockType::Paragraph)]
    #[case("- item\nnot an item", BlockType::Paragraph)]
    #[case("Normal text", BlockType::Paragraph)]
    #[case("   ", BlockType::Paragraph)]
    fn test_classify(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }
}
