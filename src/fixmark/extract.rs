//! Code extraction for similarity scoring
//!
//! The scoring service compares the code a model proposed against a reference snippet. Only
//! fenced blocks count as proposed code: comments and prose around them are dropped.

use serde::{Deserialize, Serialize};

use super::segment::{SegmentKind, SegmentSequence};
use super::segmenter::segment;

/// Contents of every fenced block in order, joined by newlines
pub fn extract_code(sequence: &SegmentSequence) -> String {
    sequence
        .of_kind(SegmentKind::FencedCode)
        .map(|segment| segment.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Request body for the scoring service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub code: String,
    pub reference_code: String,
}

impl ScoreRequest {
    /// Build a request from a raw generated fix and the reference it is scored against
    pub fn from_generated_fix(raw: &str, reference_code: impl Into<String>) -> Self {
        Self {
            code: extract_code(&segment(raw)),
            reference_code: reference_code.into(),
        }
    }
}
