//! Fluent assertion API for segment sequences

use crate::fixmark::segment::{Segment, SegmentKind, SegmentSequence};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a sequence
pub fn assert_segments(sequence: &SegmentSequence) -> SequenceAssertion<'_> {
    SequenceAssertion { sequence }
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct SequenceAssertion<'a> {
    sequence: &'a SegmentSequence,
}

impl<'a> SequenceAssertion<'a> {
    /// Assert the number of segments
    pub fn count(self, expected: usize) -> Self {
        let actual = self.sequence.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} segments, found {}: [{}]",
            expected,
            actual,
            summarize(self.sequence)
        );
        self
    }

    /// Assert the kinds of all segments, in order
    pub fn kinds(self, expected: &[SegmentKind]) -> Self {
        let actual = self.sequence.kinds();
        assert_eq!(
            actual.as_slice(),
            expected,
            "Kind mismatch: [{}]",
            summarize(self.sequence)
        );
        self
    }

    /// Assert the spans concatenate back to `raw`, contiguously and without overlap
    pub fn reassembles_to(self, raw: &str) -> Self {
        let mut expected_start = 0;
        for (i, segment) in self.sequence.iter().enumerate() {
            assert_eq!(
                segment.range.start, expected_start,
                "segments[{}] starts at {} but the previous segment ended at {}",
                i, segment.range.start, expected_start
            );
            assert!(
                !segment.span.is_empty(),
                "segments[{}] has an empty span",
                i
            );
            assert_eq!(
                raw.get(segment.range.clone()),
                Some(segment.span.as_str()),
                "segments[{}] span does not match its range",
                i
            );
            expected_start = segment.range.end;
        }
        assert_eq!(expected_start, raw.len(), "segments stop short of the input");
        assert_eq!(self.sequence.reassemble(), raw);
        self
    }

    /// Assert on a specific segment by index
    pub fn segment<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SegmentAssertion<'a>) -> SegmentAssertion<'a>,
    {
        assert!(
            index < self.sequence.len(),
            "Segment index {} out of bounds (sequence has {} segments)",
            index,
            self.sequence.len()
        );
        assertion(SegmentAssertion {
            segment: &self.sequence.segments()[index],
            context: format!("segments[{}]", index),
        });
        self
    }
}

// ============================================================================
// Segment Assertions
// ============================================================================

pub struct SegmentAssertion<'a> {
    segment: &'a Segment,
    context: String,
}

impl<'a> SegmentAssertion<'a> {
    pub fn kind(self, expected: SegmentKind) -> Self {
        assert_eq!(
            self.segment.kind, expected,
            "{}: expected kind {}, found {}",
            self.context, expected, self.segment.kind
        );
        self
    }

    pub fn content(self, expected: &str) -> Self {
        assert_eq!(
            self.segment.content, expected,
            "{}: content mismatch",
            self.context
        );
        self
    }

    pub fn span(self, expected: &str) -> Self {
        assert_eq!(
            self.segment.span, expected,
            "{}: span mismatch",
            self.context
        );
        self
    }

    pub fn language(self, expected: &str) -> Self {
        assert_eq!(
            self.segment.language(),
            Some(expected),
            "{}: language mismatch",
            self.context
        );
        self
    }

    pub fn no_language(self) -> Self {
        assert_eq!(
            self.segment.language(),
            None,
            "{}: expected no language",
            self.context
        );
        self
    }
}

fn summarize(sequence: &SegmentSequence) -> String {
    sequence
        .iter()
        .map(|s| format!("{}({:?})", s.kind, s.content))
        .collect::<Vec<_>>()
        .join(", ")
}
