//! Cursor over the raw text
//!
//!     The scanner owns the only mutable state of a segmentation call: the cursor, the start
//!     of the pending gap, and the segments committed so far. It is created per call and
//!     consumed by [Scanner::run].

use std::ops::Range;

use super::extraction::{classify_gap, extract_content};
use super::markers::{Closers, Marker, Probe};
use crate::fixmark::segment::{Segment, SegmentKind};

/// What the markers say about the current offset
enum Step {
    Commit(Marker, usize),
    /// An opener that turns the rest of the input into plain text
    Abandon(Marker),
    Advance,
}

pub(super) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    gap_start: usize,
    segments: Vec<Segment>,
    closers: Closers,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            gap_start: 0,
            segments: Vec::new(),
            closers: Closers::default(),
        }
    }

    pub(super) fn run(mut self) -> Vec<Segment> {
        let text = self.text;
        let bytes = text.as_bytes();
        while self.pos < bytes.len() {
            match self.step(bytes) {
                Step::Commit(marker, end) => {
                    self.flush_gap(self.pos);
                    self.commit(marker.kind(), self.pos..end);
                    self.pos = end;
                    self.gap_start = end;
                }
                Step::Abandon(marker) => {
                    tracing::debug!(
                        ?marker,
                        offset = self.pos,
                        "unterminated opener, rest of input is plain text"
                    );
                    self.abandon();
                    return self.segments;
                }
                Step::Advance => self.pos += 1,
            }
        }
        self.flush_gap(bytes.len());
        tracing::trace!(scanned = self.closers.scanned(), "closer searches");
        self.segments
    }

    fn step(&mut self, bytes: &[u8]) -> Step {
        for marker in Marker::PRECEDENCE {
            match marker.probe(bytes, self.pos, &mut self.closers) {
                Probe::Match(end) => return Step::Commit(marker, end),
                Probe::Unterminated if marker.swallows_rest() => return Step::Abandon(marker),
                Probe::Unterminated => {
                    tracing::debug!(?marker, offset = self.pos, "unterminated opener kept as text");
                }
                Probe::NoMatch => {}
            }
        }
        Step::Advance
    }

    /// Close the pending gap (if any) at `end`
    fn flush_gap(&mut self, end: usize) {
        if self.gap_start < end {
            let kind = classify_gap(&self.text[self.gap_start..end]);
            self.commit(kind, self.gap_start..end);
        }
        self.gap_start = end;
    }

    /// The rest of the input from the cursor is plain text. A plain pending gap absorbs it so
    /// two plain segments never sit side by side.
    fn abandon(&mut self) {
        let end = self.text.len();
        let pending = &self.text[self.gap_start..self.pos];
        if classify_gap(pending) == SegmentKind::Explanation {
            self.flush_gap(self.pos);
        }
        self.commit(SegmentKind::PlainText, self.gap_start..end);
        self.gap_start = end;
    }

    fn commit(&mut self, kind: SegmentKind, range: Range<usize>) {
        let span = &self.text[range.clone()];
        let extracted = extract_content(kind, span);
        tracing::trace!(%kind, ?range, "segment");
        self.segments.push(Segment::new(
            kind,
            range,
            span,
            extracted.content,
            extracted.language,
        ));
    }
}
