//! Line patterns shared by the segmenter, classifier and converter.

use once_cell::sync::Lazy;
use regex::Regex;

/// Code fence marker
pub const FENCE: &str = "```";

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6}) ").unwrap());

static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[*-] ").unwrap());
/// Ordered item as seen by the segmenter (any whitespace after the dot)
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// Ordered item as required by the classifier (a literal space)
static ORDERED_ITEM_STRICT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\. ").unwrap());

static UNORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[*-]\s*").unwrap());
static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// List flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// HTML tag wrapping the items
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Check if a line opens or closes a fenced code block.
///
/// An info string after the fence (```` ```rust ````) is allowed, four or
/// more backticks are not a fence.
pub fn is_fence(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(FENCE) && !trimmed.starts_with("````")
}

/// Heading level of a line, if it starts with 1-6 `#` and a space
pub fn heading_level(line: &str) -> Option<u8> {
    HEADING
        .captures(line.trim_start())
        .and_then(|caps| caps.get(1))
        .map(|hashes| hashes.as_str().len() as u8)
}

/// List kind of a single line, used for block boundaries
pub fn list_kind(line: &str) -> Option<ListKind> {
    let trimmed = line.trim();
    if UNORDERED_ITEM.is_match(trimmed) {
        Some(ListKind::Unordered)
    } else if ORDERED_ITEM.is_match(trimmed) {
        Some(ListKind::Ordered)
    } else {
        None
    }
}

/// Check if every non-empty line of a block is an item of the given kind
pub fn is_list_block(lines: &[&str], kind: ListKind) -> bool {
    let pattern = match kind {
        ListKind::Unordered => &*UNORDERED_ITEM,
        ListKind::Ordered => &*ORDERED_ITEM_STRICT,
    };
    lines.iter().all(|line| pattern.is_match(line.trim()))
}

/// Remove the list marker and surrounding whitespace from an item line
pub fn strip_list_marker(line: &str, kind: ListKind) -> &str {
    let trimmed = line.trim();
    let pattern = match kind {
        ListKind::Unordered => &*UNORDERED_MARKER,
        ListKind::Ordered => &*ORDERED_MARKER,
    };
    match pattern.find(trimmed) {
        Some(marker) => trimmed[marker.end()..].trim(),
        None => trimmed,
    }
}

/// Number of leading whitespace characters
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drop the first `count` characters of a line
pub fn skip_columns(line: &str, count: usize) -> &str {
    line.char_indices()
        .nth(count)
        .map_or("", |(offset, _)| &line[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_fence() {
        assert!(is_fence("```"));
        assert!(is_fence("  ```rust"));
        assert!(!is_fence("````"));
        assert!(!is_fence("code ```"));
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# Title"), Some(1));
        assert_eq!(heading_level("###### Deep"), Some(6));
        assert_eq!(heading_level("####### Too deep"), None);
        assert_eq!(heading_level("#NoSpace"), None);
        assert_eq!(heading_level("  ## Indented"), Some(2));
    }

    #[test]
    fn test_list_kind() {
        assert_eq!(list_kind("- item"), Some(ListKind::Unordered));
        assert_eq!(list_kind("  * item"), Some(ListKind::Unordered));
        assert_eq!(list_kind("12. item"), Some(ListKind::Ordered));
        assert_eq!(list_kind("*emphasis*"), None);
        assert_eq!(list_kind("plain"), None);
    }

    #[test]
    fn test_strip_list_marker() {
        assert_eq!(strip_list_marker("-   spaced  ", ListKind::Unordered), "spaced");
        assert_eq!(strip_list_marker("  3. third", ListKind::Ordered), "third");
    }

    #[test]
    fn test_columns() {
        assert_eq!(leading_whitespace("    x"), 4);
        assert_eq!(leading_whitespace("\tx"), 1);
        assert_eq!(skip_columns("    x = 1", 2), "  x = 1");
        assert_eq!(skip_columns("ab", 5), "");
    }
}
