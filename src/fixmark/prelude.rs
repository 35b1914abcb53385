//! The types most callers need, in one import

pub use super::extract::{extract_code, ScoreRequest};
pub use super::projection::{
    code_view, explanation_view, project, Highlighter, PlainHighlighter, Projection, RenderItem,
    RenderOptions,
};
pub use super::segment::{Segment, SegmentKind, SegmentSequence};
pub use super::segmenter::segment;
