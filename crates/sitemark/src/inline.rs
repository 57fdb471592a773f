//! Inline span tokenizer
//!
//! Splits a run of text into typed spans. Each stage only looks at the
//! [`SpanKind::Plain`] spans left by the stages before it, in this order:
//! `**` bold, `*` italic, `` ` `` code, `![alt](url)` images and
//! `[text](url)` links.

use once_cell::sync::Lazy;
use regex::Regex;
use sitemark_core::Node;

use crate::{ConvertError, Result};

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// A label followed by an opening paren that is never closed
static UNTERMINATED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\[\]]*\]\([^\(\)]*$").unwrap());

/// Kind of an inline span. Links and images carry their URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A typed run of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    kind: SpanKind,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    /// Visible text (alt text for images)
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &SpanKind {
        &self.kind
    }

    /// URL of a link or image
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }

    /// Convert this span to its HTML leaf
    pub fn to_node(&self) -> Result<Node> {
        let node = match &self.kind {
            SpanKind::Plain => Node::text(&self.text)?,
            SpanKind::Bold => Node::element("b", &self.text)?,
            SpanKind::Italic => Node::element("i", &self.text)?,
            SpanKind::Code => Node::element("code", &self.text)?,
            SpanKind::Link { url } => Node::element_with_attrs("a", &self.text, vec![("href", url.as_str())])?,
            SpanKind::Image { url } => Node::image(url, &self.text),
        };
        Ok(node)
    }

    fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Empty spans are dropped, except images which may have no alt text
    fn is_kept(&self) -> bool {
        !self.text.is_empty() || matches!(self.kind, SpanKind::Image { .. })
    }
}

/// Tokenize text into an ordered sequence of spans covering the whole input
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "*", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_images(spans);
    let spans = split_links(spans)?;

    Ok(spans.into_iter().filter(Span::is_kept).collect())
}

/// Tokenize text and convert every span to a leaf node
pub(crate) fn inline_nodes(text: &str) -> Result<Vec<Node>> {
    tokenize(text)?.iter().map(Span::to_node).collect()
}

/// Split plain spans on a paired delimiter.
///
/// Segments alternate plain / delimited, so a balanced split always has an
/// odd number of segments.
fn split_delimiter(spans: Vec<Span>, delimiter: &'static str, kind: SpanKind) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(ConvertError::UnclosedDelimiter {
                delimiter,
                text: span.text.clone(),
            });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment_kind = if i % 2 == 1 {
                kind.clone()
            } else {
                SpanKind::Plain
            };
            result.push(Span::new(segment, segment_kind));
        }
    }

    Ok(result)
}

fn split_images(spans: Vec<Span>) -> Vec<Span> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        while let Some(caps) = IMAGE.captures(rest) {
            let (Some(whole), Some(alt), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                break;
            };
            push_plain(&mut result, &rest[..whole.start()]);
            result.push(Span::image(alt.as_str(), url.as_str()));
            rest = &rest[whole.end()..];
        }
        push_plain(&mut result, rest);
    }

    result
}

fn split_links(spans: Vec<Span>) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        let mut search_from = 0;
        while let Some(caps) = LINK.captures_at(rest, search_from) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                break;
            };

            // `![...](...)` left over here is not a link
            if rest[..whole.start()].ends_with('!') {
                search_from = whole.start() + 1;
                continue;
            }

            let before = &rest[..whole.start()];
            check_terminated(before)?;
            push_plain(&mut result, before);
            result.push(Span::link(label.as_str(), url.as_str()));
            rest = &rest[whole.end()..];
            search_from = 0;
        }

        check_terminated(rest)?;
        push_plain(&mut result, rest);
    }

    Ok(result)
}

fn check_terminated(text: &str) -> Result<()> {
    match UNTERMINATED.find(text) {
        Some(marker) => Err(ConvertError::UnterminatedMarker {
            text: marker.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

fn push_plain(spans: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        spans.push(Span::plain(text));
    }
}
