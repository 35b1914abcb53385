//! Output formats for segment sequences
//!
//! This module contains the serializations a segment sequence can be printed in:
//! - Structured dumps of the whole sequence (json, yaml, tag, treeviz)
//! - Rendered views (code-view, explanation-view)
//! - The extracted code submitted for scoring (code)

pub mod registry;
pub mod tag;
pub mod treeviz;
pub mod views;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{to_tag_str, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use views::{CodeFormatter, JsonFormatter, ViewFormatter, YamlFormatter};
