//! Main module for fixmark library functionality
//!
//! Control flow: raw text -> [segmenter] -> [segment::SegmentSequence] -> [projection] views
//! (or [formats] / [extract]) -> renderer. Everything from the segmenter down is pure; the
//! [config], [logging] and [upstream] modules are the ambient edges used by the binary.

pub mod config;
pub mod extract;
pub mod formats;
pub mod logging;
pub mod prelude;
pub mod projection;
pub mod render;
pub mod segment;
pub mod segmenter;
pub mod testing;
pub mod upstream;
