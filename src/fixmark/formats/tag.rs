//! XML-like tag serialization
//!
//! One tag per segment, named after the segment kind, with the extracted content as text.
//! Fences carry their language as an attribute.
//!
//! ## Example
//!
//! ```text
//! <segments>
//!   <comment>// fix applied</comment>
//!   <fenced-code language="js">const x = 1;</fenced-code>
//! </segments>
//! ```

use super::registry::{FormatError, Formatter};
use crate::fixmark::segment::SegmentSequence;

/// Serialize a sequence to the tag format
pub fn to_tag_str(sequence: &SegmentSequence) -> String {
    if sequence.is_empty() {
        return "<segments></segments>\n".to_string();
    }

    let mut output = String::from("<segments>\n");
    for segment in sequence {
        let tag = segment.kind.name();
        output.push_str("  <");
        output.push_str(tag);
        if let Some(language) = segment.language() {
            output.push_str(&format!(" language=\"{}\"", escape_xml(language)));
        }
        output.push('>');
        output.push_str(&escape_xml(&segment.content));
        output.push_str(&format!("</{}>\n", tag));
    }
    output.push_str("</segments>\n");
    output
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formatter implementation for the tag format
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, sequence: &SegmentSequence) -> Result<String, FormatError> {
        Ok(to_tag_str(sequence))
    }

    fn description(&self) -> &str {
        "XML-like one tag per segment, with extracted content"
    }
}
