//! View projections over a segment sequence
//!
//!     A generated fix is shown twice: once as code (comments and fenced blocks) and once as
//!     an explanation (prose, explanations and inline code). Both views are the same
//!     order-preserving filter over one [SegmentSequence], parameterized by [Projection], so
//!     they can never drift apart in how they read the markup.
//!
//!         Kind         | Code view | Explanation view
//!         -------------|-----------|-----------------
//!         Comment      | yes       | no
//!         FencedCode   | yes       | no
//!         InlineCode   | no        | yes (emphasis)
//!         Explanation  | no        | yes (emphasis)
//!         PlainText    | no        | yes
//!
//!     Fenced code goes through a [Highlighter], the seam to whatever syntax highlighter the
//!     caller renders with. Fences without a language tag use the configured default.

use serde::Serialize;

use super::segment::{Segment, SegmentKind, SegmentSequence};

pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Which view a caller is rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    Code,
    Explanation,
}

impl Projection {
    /// Whether segments of `kind` are rendered in this view
    pub fn retains(self, kind: SegmentKind) -> bool {
        match self {
            Projection::Code => matches!(kind, SegmentKind::Comment | SegmentKind::FencedCode),
            Projection::Explanation => matches!(
                kind,
                SegmentKind::Explanation | SegmentKind::InlineCode | SegmentKind::PlainText
            ),
        }
    }
}

/// Syntax highlighting collaborator
///
/// Receives the content and the resolved language of one fenced block and returns its display
/// form.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: &str) -> String;
}

/// Highlighter that returns code unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: &str) -> String {
        code.to_string()
    }
}

/// Knobs shared by both projections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Language used for fences that carry no tag
    pub default_language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// One renderable item of a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RenderItem {
    Comment { text: String },
    Code { language: String, rendered: String },
    Emphasis { text: String },
    Plain { text: String },
}

impl RenderItem {
    fn from_segment(
        segment: &Segment,
        options: &RenderOptions,
        highlighter: &dyn Highlighter,
    ) -> Self {
        match segment.kind {
            SegmentKind::Comment => RenderItem::Comment {
                text: segment.content.clone(),
            },
            SegmentKind::FencedCode => {
                let language = segment
                    .language()
                    .unwrap_or(options.default_language.as_str())
                    .to_string();
                let rendered = highlighter.highlight(&segment.content, &language);
                RenderItem::Code { language, rendered }
            }
            SegmentKind::InlineCode | SegmentKind::Explanation => RenderItem::Emphasis {
                text: segment.content.clone(),
            },
            SegmentKind::PlainText => RenderItem::Plain {
                text: segment.content.clone(),
            },
        }
    }
}

/// Render the segments `projection` retains, in order
pub fn project(
    sequence: &SegmentSequence,
    projection: Projection,
    options: &RenderOptions,
    highlighter: &dyn Highlighter,
) -> Vec<RenderItem> {
    let items: Vec<RenderItem> = sequence
        .iter()
        .filter(|segment| projection.retains(segment.kind))
        .map(|segment| RenderItem::from_segment(segment, options, highlighter))
        .collect();
    tracing::debug!(?projection, items = items.len(), "projected segments");
    items
}

impl SegmentSequence {
    /// Render one view with default options and no highlighting
    pub fn project(&self, projection: Projection) -> Vec<RenderItem> {
        project(self, projection, &RenderOptions::default(), &PlainHighlighter)
    }
}

/// Code view with default options and no highlighting
pub fn code_view(sequence: &SegmentSequence) -> Vec<RenderItem> {
    sequence.project(Projection::Code)
}

/// Explanation view with default options
pub fn explanation_view(sequence: &SegmentSequence) -> Vec<RenderItem> {
    sequence.project(Projection::Explanation)
}
