//! Segment types produced by the segmenter
//!
//!     A generated fix is a single block of text that freely mixes prose, comments, inline
//!     code and fenced code blocks. The segmenter slices it into contiguous, classified
//!     segments. Every segment keeps both the exact slice of the input it came from (its
//!     span) and the display text derived from it (its content), so views can render the
//!     content while the sequence as a whole still reproduces the input byte for byte.
//!
//! Segment Kinds
//!
//!         - Comment: `// line` or `/* block */` (markers kept in the content)
//!         - FencedCode: ```lang ... ``` (content is opaque, optional language tag)
//!         - InlineCode: `code`
//!         - Explanation: ***text*** or a run of text ending in **
//!         - PlainText: everything else
//!
//!     See [segmenter](super::segmenter) for the grammar and precedence rules.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The classification of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Line (`//`) or block (`/* */`) comment
    Comment,
    /// Triple-backtick fenced block, content never re-tokenized
    FencedCode,
    /// Single-backtick code span
    InlineCode,
    /// `***...***` or a run of text ending in `**`
    Explanation,
    /// Anything no marker claimed
    PlainText,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 5] = [
        SegmentKind::Comment,
        SegmentKind::FencedCode,
        SegmentKind::InlineCode,
        SegmentKind::Explanation,
        SegmentKind::PlainText,
    ];

    /// Kebab-case name, also used as the tag name by the tag format
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Comment => "comment",
            SegmentKind::FencedCode => "fenced-code",
            SegmentKind::InlineCode => "inline-code",
            SegmentKind::Explanation => "explanation",
            SegmentKind::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified, contiguous slice of a raw text block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub(crate) kind: SegmentKind,
    /// Byte range of `span` inside the raw text
    pub(crate) range: Range<usize>,
    /// The exact input slice, markers included
    pub(crate) span: String,
    /// Display text with the kind's markers removed
    pub(crate) content: String,
    /// Language tag of a fenced block, when its opening line carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) language: Option<String>,
}

impl Segment {
    pub fn new(
        kind: SegmentKind,
        range: Range<usize>,
        span: impl Into<String>,
        content: impl Into<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            kind,
            range,
            span: span.into(),
            content: content.into(),
            language,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Byte range of the span inside the segmented input
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn span(&self) -> &str {
        &self.span
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn is_comment(&self) -> bool {
        self.kind == SegmentKind::Comment
    }

    pub fn is_fenced_code(&self) -> bool {
        self.kind == SegmentKind::FencedCode
    }

    pub fn is_inline_code(&self) -> bool {
        self.kind == SegmentKind::InlineCode
    }

    pub fn is_explanation(&self) -> bool {
        self.kind == SegmentKind::Explanation
    }

    pub fn is_plain_text(&self) -> bool {
        self.kind == SegmentKind::PlainText
    }
}

/// Ordered, gapless, non-overlapping segments of one raw text
///
/// Produced fresh by every call to [segment](super::segmenter::segment). Concatenating the
/// spans in order gives back the input exactly (see [SegmentSequence::reassemble]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentSequence {
    segments: Vec<Segment>,
}

impl SegmentSequence {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn into_vec(self) -> Vec<Segment> {
        self.segments
    }

    /// Segments of a single kind, in order
    pub fn of_kind(&self, kind: SegmentKind) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |segment| segment.kind == kind)
    }

    /// Concatenate every span in order. Equal to the segmented input.
    pub fn reassemble(&self) -> String {
        let capacity = self.segments.last().map(|s| s.range.end).unwrap_or(0);
        let mut out = String::with_capacity(capacity);
        for segment in &self.segments {
            out.push_str(&segment.span);
        }
        out
    }

    pub fn kinds(&self) -> Vec<SegmentKind> {
        self.segments.iter().map(|s| s.kind).collect()
    }
}

impl<'a> IntoIterator for &'a SegmentSequence {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for SegmentSequence {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str, start: usize) -> Segment {
        Segment::new(
            SegmentKind::PlainText,
            start..start + text.len(),
            text,
            text,
            None,
        )
    }

    #[test]
    fn test_segment_kind_display() {
        assert_eq!(format!("{}", SegmentKind::Comment), "comment");
        assert_eq!(format!("{}", SegmentKind::FencedCode), "fenced-code");
        assert_eq!(format!("{}", SegmentKind::InlineCode), "inline-code");
        assert_eq!(format!("{}", SegmentKind::Explanation), "explanation");
        assert_eq!(format!("{}", SegmentKind::PlainText), "plain-text");
    }

    #[test]
    fn test_reassemble_concatenates_spans() {
        let seq = SegmentSequence::new(vec![plain("hello ", 0), plain("world", 6)]);
        assert_eq!(seq.reassemble(), "hello world");
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_of_kind_filters_in_order() {
        let comment = Segment::new(SegmentKind::Comment, 0..4, "// a", "// a", None);
        let seq = SegmentSequence::new(vec![comment.clone(), plain("x", 4)]);
        let comments: Vec<_> = seq.of_kind(SegmentKind::Comment).collect();
        assert_eq!(comments, vec![&comment]);
        assert_eq!(seq.kinds(), vec![SegmentKind::Comment, SegmentKind::PlainText]);
    }

    #[test]
    fn test_accessors_read_every_field() {
        let fence = Segment::new(
            SegmentKind::FencedCode,
            2..15,
            "```js\nx()\n```",
            "x()",
            Some("js".into()),
        );
        assert_eq!(fence.kind(), SegmentKind::FencedCode);
        assert_eq!(fence.range(), 2..15);
        assert_eq!(fence.span(), "```js\nx()\n```");
        assert_eq!(fence.content(), "x()");
        assert_eq!(fence.language(), Some("js"));
        assert!(fence.is_fenced_code());
    }

    #[test]
    fn test_sequence_serializes_as_array() {
        let seq = SegmentSequence::new(vec![plain("x", 0)]);
        let json = serde_json::to_value(&seq).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["kind"], "plain-text");
        assert_eq!(json[0]["range"]["start"], 0);
        assert!(json[0].get("language").is_none());
    }
}
