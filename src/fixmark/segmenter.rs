//! Generated-fix segmenter
//!
//!     Splits one block of model-generated text into an ordered [SegmentSequence]. The input
//!     mixes prose, comments, inline code and fenced blocks with no reliable delimiter
//!     discipline, so the segmenter is total: malformed or unterminated markup degrades to a
//!     lower-priority kind (ultimately plain text) and never errors.
//!
//! Marker Grammar
//!
//!     A cursor walks the input once. At each offset the markers are tried in a fixed
//!     precedence order and the first one that matches commits its whole span, which is
//!     never rescanned:
//!
//!         1. Line comment: a line whose trimmed content starts with //
//!         2. Block comment: /* ... */ (non-greedy, may span lines)
//!         3. Fence: ``` ... ``` (non-greedy, may span lines, content is opaque)
//!         4. Inline code: ` ... ` (non-greedy, never a fence)
//!         5. Explanation: *** ... *** on one line
//!
//!     Text between two matches (a gap) becomes PlainText, unless its right-trimmed text
//!     ends in ** in which case the whole gap is an Explanation.
//!
//! Degradation
//!
//!     An opening fence with no closing fence turns the rest of the input into plain text.
//!     Every other unterminated opener is left in the gap as ordinary text and scanning goes
//!     on. See [markers] for the per-marker probes and [extraction] for how content and
//!     language tags are derived from a committed span.

mod extraction;
mod markers;
mod scanner;

pub use extraction::{extract_content, Extracted};
pub use markers::Marker;

use super::segment::SegmentSequence;

/// Segment a raw generated fix.
///
/// Pure and deterministic: the same input always yields an equal sequence, and the spans of
/// the result concatenate back to `raw`.
pub fn segment(raw: &str) -> SegmentSequence {
    let segments = scanner::Scanner::new(raw).run();
    tracing::trace!(segments = segments.len(), bytes = raw.len(), "segmented input");
    SegmentSequence::new(segments)
}
