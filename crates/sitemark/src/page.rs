//! Page assembly helpers: title extraction and template substitution.

use crate::convert::convert;
use crate::Result;

/// Title used when a document has no top-level heading
pub const UNTITLED: &str = "Untitled";

/// Template placeholder replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Template placeholder replaced by the rendered body
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Text of the first `#` heading (not `##` or deeper), or [`UNTITLED`]
pub fn extract_title(document: &str) -> &str {
    document
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('#') && !line.starts_with("##"))
        .map(|line| line[1..].trim())
        .find(|title| !title.is_empty())
        .unwrap_or(UNTITLED)
}

/// Replace every title and content placeholder in a template
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Convert a document and place it into a template
pub fn render_page(document: &str, template: &str) -> Result<String> {
    let body = convert(document)?.to_string();
    Ok(fill_template(template, extract_title(document), &body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# Main Title\n\nContent here\n\n## Subheading"), "Main Title");
    }

    #[test]
    fn test_extract_title_skips_subheadings() {
        assert_eq!(extract_title("## Sub\n\n# Real"), "Real");
    }

    #[test]
    fn test_extract_title_missing() {
        assert_eq!(extract_title("Content without title\n\n## Subheading"), UNTITLED);
        assert_eq!(extract_title("#\n"), UNTITLED);
    }

    #[test]
    fn test_fill_template_replaces_every_placeholder() {
        let page = fill_template("{{ Title }} | {{ Title }}: {{ Content }}", "T", "<p>x</p>");
        assert_eq!(page, "T | T: <p>x</p>");
    }

    #[test]
    fn test_render_page() {
        let page = render_page("# Test Title\n\nThis is a test.", TEMPLATE).unwrap();
        assert_eq!(
            page,
            "<html><head><title>Test Title</title></head>\
             <body><div><h1>Test Title</h1><p>This is a test.</p></div></body></html>"
        );
    }

    #[test]
    fn test_render_page_propagates_errors() {
        assert!(render_page("**open", TEMPLATE).is_err());
    }
}
