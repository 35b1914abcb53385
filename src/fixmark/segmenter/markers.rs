//! Marker probes
//!
//!     Each marker knows how to test a single offset of the input. A probe either commits a
//!     span end, reports that the opener is present but never closed, or does not apply.
//!     Probes work on bytes: every marker is ASCII, so any offset a probe commits to is a
//!     char boundary even when the surrounding text is not.
//!
//!     Closer searches for block comments and inline code can run to the end of the input.
//!     Their results are kept in [Closers] for the whole scan, so a long run of unclosed
//!     openers is searched once instead of once per opener.

use crate::fixmark::segment::SegmentKind;

const FENCE: &[u8] = b"```";
const TRIPLE_STAR: &[u8] = b"***";

/// A recognizable opening marker, listed in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    LineComment,
    BlockComment,
    Fence,
    InlineCode,
    Explanation,
}

/// Outcome of probing one marker at one offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Probe {
    /// The marker matches; the span ends (exclusive) at this offset
    Match(usize),
    /// The opener is present but its closer never appears
    Unterminated,
    NoMatch,
}

impl Marker {
    /// Precedence when several markers could start at the same offset
    pub const PRECEDENCE: [Marker; 5] = [
        Marker::LineComment,
        Marker::BlockComment,
        Marker::Fence,
        Marker::InlineCode,
        Marker::Explanation,
    ];

    pub fn kind(self) -> SegmentKind {
        match self {
            Marker::LineComment | Marker::BlockComment => SegmentKind::Comment,
            Marker::Fence => SegmentKind::FencedCode,
            Marker::InlineCode => SegmentKind::InlineCode,
            Marker::Explanation => SegmentKind::Explanation,
        }
    }

    /// An unterminated opener of this marker turns the rest of the input into plain text
    pub fn swallows_rest(self) -> bool {
        matches!(self, Marker::Fence)
    }

    pub(super) fn probe(self, bytes: &[u8], pos: usize, closers: &mut Closers) -> Probe {
        match self {
            Marker::LineComment => probe_line_comment(bytes, pos),
            Marker::BlockComment => probe_block_comment(bytes, pos, closers),
            Marker::Fence => probe_fence(bytes, pos),
            Marker::InlineCode => probe_inline_code(bytes, pos, closers),
            Marker::Explanation => probe_explanation(bytes, pos),
        }
    }
}

/// Closer positions found so far in one input, reused while the cursor moves right
#[derive(Debug, Default)]
pub(super) struct Closers {
    block_comment: ForwardSearch,
    backtick: ForwardSearch,
}

impl Closers {
    /// Bytes examined by closer searches so far
    pub(super) fn scanned(&self) -> usize {
        self.block_comment.scanned + self.backtick.scanned
    }
}

/// The last search for one needle: where it started and what it found
#[derive(Debug, Default)]
struct ForwardSearch {
    last: Option<(usize, Option<usize>)>,
    scanned: usize,
}

impl ForwardSearch {
    /// First occurrence of `needle` at or after `from`.
    ///
    /// The previous answer still holds when `from` did not move left of the previous start
    /// and the previous hit (if any) is not behind `from`. A miss stays a miss for every
    /// later offset.
    fn find(&mut self, bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
        if let Some((start, found)) = self.last {
            if from >= start && found.map_or(true, |at| at >= from) {
                return found;
            }
        }
        let found = find(bytes, from, needle);
        let stop = found.map_or(bytes.len(), |at| at + needle.len());
        self.scanned += stop.saturating_sub(from);
        self.last = Some((from, found));
        found
    }
}

fn probe_line_comment(bytes: &[u8], pos: usize) -> Probe {
    if pos > 0 && bytes[pos - 1] != b'\n' {
        return Probe::NoMatch;
    }
    let mut start = pos;
    while start < bytes.len() && matches!(bytes[start], b' ' | b'\t') {
        start += 1;
    }
    if !bytes[start..].starts_with(b"//") {
        return Probe::NoMatch;
    }
    match find_byte(bytes, start, b'\n') {
        Some(newline) => Probe::Match(newline + 1),
        None => Probe::Match(bytes.len()),
    }
}

fn probe_block_comment(bytes: &[u8], pos: usize, closers: &mut Closers) -> Probe {
    if !bytes[pos..].starts_with(b"/*") {
        return Probe::NoMatch;
    }
    match closers.block_comment.find(bytes, pos + 2, b"*/") {
        Some(close) => Probe::Match(close + 2),
        None => Probe::Unterminated,
    }
}

fn probe_fence(bytes: &[u8], pos: usize) -> Probe {
    if !bytes[pos..].starts_with(FENCE) {
        return Probe::NoMatch;
    }
    match find(bytes, pos + FENCE.len(), FENCE) {
        Some(close) => Probe::Match(close + FENCE.len()),
        None => Probe::Unterminated,
    }
}

fn probe_inline_code(bytes: &[u8], pos: usize, closers: &mut Closers) -> Probe {
    if bytes[pos] != b'`' || bytes[pos..].starts_with(FENCE) {
        return Probe::NoMatch;
    }
    match closers.backtick.find(bytes, pos + 1, b"`") {
        Some(close) => Probe::Match(close + 1),
        None => Probe::Unterminated,
    }
}

fn probe_explanation(bytes: &[u8], pos: usize) -> Probe {
    if !bytes[pos..].starts_with(TRIPLE_STAR) {
        return Probe::NoMatch;
    }
    let line_end = find_byte(bytes, pos, b'\n').unwrap_or(bytes.len());
    match find(&bytes[..line_end], pos + TRIPLE_STAR.len(), TRIPLE_STAR) {
        Some(close) => Probe::Match(close + TRIPLE_STAR.len()),
        None => Probe::Unterminated,
    }
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}

fn find(bytes: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| from + i)
}
