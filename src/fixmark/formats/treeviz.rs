//! Treeviz formatter for segment sequences
//!
//! One line per segment, for quick scanning of how a generated fix was split:
//! <connector> <icon> <kind>[<language>] <start>..<end> <label> (truncated to 30 characters)
//!
//! Example:
//!
//!   ⧉ 4 segments
//!   ├─ 𝐁 explanation 0..28 This explains the bug.
//!   ├─ ◦ plain-text 28..33  Use
//!   ├─ ƒ inline-code 33..38 let
//!   └─ ◦ plain-text 38..47  instead.
//!
//! Icons
//!     Sequence: ⧉
//!     Comment: "
//!     FencedCode: 𝒱
//!     InlineCode: ƒ
//!     Explanation: 𝐁
//!     PlainText: ◦

use super::registry::{FormatError, Formatter};
use crate::fixmark::segment::{Segment, SegmentKind, SegmentSequence};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Comment => "\"",
        SegmentKind::FencedCode => "𝒱",
        SegmentKind::InlineCode => "ƒ",
        SegmentKind::Explanation => "𝐁",
        SegmentKind::PlainText => "◦",
    }
}

fn format_segment(segment: &Segment, is_last: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let kind = match segment.language() {
        Some(language) => format!("{}[{}]", segment.kind, language),
        None => segment.kind.to_string(),
    };
    let label = truncate(&segment.content.replace('\n', "↵"), LABEL_WIDTH);
    format!(
        "{} {} {} {}..{} {}\n",
        connector,
        get_icon(segment.kind),
        kind,
        segment.range.start,
        segment.range.end,
        label
    )
}

pub fn to_treeviz_str(sequence: &SegmentSequence) -> String {
    let count = sequence.len();
    let noun = if count == 1 { "segment" } else { "segments" };
    let mut output = format!("⧉ {} {}\n", count, noun);
    for (i, segment) in sequence.iter().enumerate() {
        output.push_str(&format_segment(segment, i + 1 == count));
    }
    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, sequence: &SegmentSequence) -> Result<String, FormatError> {
        Ok(to_treeviz_str(sequence))
    }

    fn description(&self) -> &str {
        "One line per segment with icon, kind, byte range and label"
    }
}
