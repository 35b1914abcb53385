//! # fixmark
//!
//! Segmenter for model-generated fixes: splits one block of generated text (prose, comments,
//! inline code and fenced code, with loose delimiter discipline) into typed segments, and
//! projects them into a code view and an explanation view.
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](fixmark::testing).
//! Segmenter tests load curated inputs through `Samples` and verify whole sequences with
//! `assert_segments`.

pub mod fixmark;
