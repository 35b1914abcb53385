//! Testing utilities for segmenter assertions
//!
//! Two tools are meant to be used together in tests:
//!
//! 1. **[Samples](samples::Samples)** - curated generated fixes under `samples/`, shaped like
//!    real model output (mixed prose, comments, fences and stray markers).
//! 2. **[assert_segments](fn@assert_segments)** - a fluent API that checks kinds, spans and
//!    contents of a whole sequence at once, and always knows which index failed.
//!
//! ```rust-example
//! use fixmark::fixmark::segment::SegmentKind;
//! use fixmark::fixmark::segmenter::segment;
//! use fixmark::fixmark::testing::assert_segments;
//!
//! let raw = "// fix applied\n```js\nconst x = 1;\n```";
//! assert_segments(&segment(raw))
//!     .reassembles_to(raw)
//!     .kinds(&[SegmentKind::Comment, SegmentKind::FencedCode])
//!     .segment(1, |s| s.content("const x = 1;").language("js"));
//! ```

pub mod assertions;
pub mod samples;

pub use assertions::{assert_segments, SegmentAssertion, SequenceAssertion};
pub use samples::Samples;
