//! Content extraction
//!
//!     Classification decides a segment's kind and span; extraction then derives the display
//!     content from the span. Extraction never looks outside the span and never changes the
//!     kind.
//!
//!         - Comment: the span verbatim, minus a line comment's line terminator
//!         - FencedCode: strip the fences, take a whitespace-free first line as the language
//!           tag, then drop leading and trailing blank lines
//!         - InlineCode: strip the backticks and trim
//!         - Explanation: remove every run of two or more `*`
//!         - PlainText: the span verbatim

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fixmark::segment::SegmentKind;

static LANGUAGE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+$").unwrap());
static STAR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*{2,}").unwrap());

/// Display content derived from a span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub content: String,
    pub language: Option<String>,
}

impl Extracted {
    fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: None,
        }
    }
}

/// Derive content (and a fence's language) from a span already classified as `kind`
pub fn extract_content(kind: SegmentKind, span: &str) -> Extracted {
    match kind {
        SegmentKind::Comment => Extracted::text(strip_line_terminator(span)),
        SegmentKind::FencedCode => extract_fence(span),
        SegmentKind::InlineCode => {
            let inner = span
                .strip_prefix('`')
                .and_then(|s| s.strip_suffix('`'))
                .unwrap_or(span);
            Extracted::text(inner.trim())
        }
        SegmentKind::Explanation => Extracted::text(STAR_RUN.replace_all(span, "")),
        SegmentKind::PlainText => Extracted::text(span),
    }
}

/// Kind of an unmatched gap: an Explanation when it ends in `**`, plain text otherwise
pub(super) fn classify_gap(gap: &str) -> SegmentKind {
    if gap.trim_end().ends_with("**") {
        SegmentKind::Explanation
    } else {
        SegmentKind::PlainText
    }
}

fn strip_line_terminator(span: &str) -> &str {
    span.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(span)
}

fn extract_fence(span: &str) -> Extracted {
    let inner = span
        .strip_prefix("```")
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or("");

    let (language, body) = match inner.split_once('\n') {
        Some((first, rest)) => {
            let first = first.strip_suffix('\r').unwrap_or(first);
            if LANGUAGE_TAG.is_match(first) {
                (Some(first.to_string()), rest)
            } else {
                (None, inner)
            }
        }
        None => (None, inner),
    };

    Extracted {
        content: trim_blank_lines(body).to_string(),
        language,
    }
}

/// Drop whole blank lines at both ends, keeping indentation of the first kept line
fn trim_blank_lines(text: &str) -> &str {
    let mut start = 0;
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    let rest = &text[start..];
    if rest.trim().is_empty() {
        return "";
    }

    let mut end = rest.len();
    while let Some(newline) = rest[..end].rfind('\n') {
        if rest[newline + 1..end].trim().is_empty() {
            end = newline;
        } else {
            break;
        }
    }
    let kept = &rest[..end];
    kept.strip_suffix('\r').unwrap_or(kept)
}
