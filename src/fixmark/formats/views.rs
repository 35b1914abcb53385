//! Structured dumps, rendered views, and extracted code

use super::registry::{FormatError, Formatter};
use crate::fixmark::extract::extract_code;
use crate::fixmark::projection::{project, PlainHighlighter, Projection, RenderOptions};
use crate::fixmark::render::render_text;
use crate::fixmark::segment::SegmentSequence;

/// Pretty-printed JSON array of segments
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, sequence: &SegmentSequence) -> Result<String, FormatError> {
        serde_json::to_string_pretty(sequence)
            .map(|json| json + "\n")
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Segments as a JSON array (kind, range, span, content, language)"
    }
}

/// YAML list of segments
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, sequence: &SegmentSequence) -> Result<String, FormatError> {
        serde_yaml::to_string(sequence).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Segments as a YAML list"
    }
}

/// Code of every fenced block, as submitted for scoring
pub struct CodeFormatter;

impl Formatter for CodeFormatter {
    fn name(&self) -> &str {
        "code"
    }

    fn serialize(&self, sequence: &SegmentSequence) -> Result<String, FormatError> {
        let mut code = extract_code(sequence);
        if !code.is_empty() {
            code.push('\n');
        }
        Ok(code)
    }

    fn description(&self) -> &str {
        "Fenced code only, blocks joined by newlines"
    }
}

/// A projected view rendered as terminal text
pub struct ViewFormatter {
    projection: Projection,
    options: RenderOptions,
    styled: bool,
}

impl ViewFormatter {
    pub fn new(projection: Projection, options: RenderOptions, styled: bool) -> Self {
        Self {
            projection,
            options,
            styled,
        }
    }
}

impl Formatter for ViewFormatter {
    fn name(&self) -> &str {
        match self.projection {
            Projection::Code => "code-view",
            Projection::Explanation => "explanation-view",
        }
    }

    fn serialize(&self, sequence: &SegmentSequence) -> Result<String, FormatError> {
        let items = project(sequence, self.projection, &self.options, &PlainHighlighter);
        Ok(render_text(&items, self.styled))
    }

    fn description(&self) -> &str {
        match self.projection {
            Projection::Code => "Comments and fenced code, prose suppressed",
            Projection::Explanation => "Prose, explanations and inline code, fenced code suppressed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixmark::segmenter::segment;

    #[test]
    fn json_round_trips_through_serde() {
        let seq = segment("// a\n```js\nx\n```");
        let json = JsonFormatter.serialize(&seq).unwrap();
        let back: SegmentSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn yaml_lists_kinds() {
        let yaml = YamlFormatter.serialize(&segment("`x`")).unwrap();
        assert!(yaml.contains("kind: inline-code"));
    }

    #[test]
    fn code_formatter_ends_with_newline_only_when_non_empty() {
        assert_eq!(CodeFormatter.serialize(&segment("```\nx\n```")).unwrap(), "x\n");
        assert_eq!(CodeFormatter.serialize(&segment("prose")).unwrap(), "");
    }

    #[test]
    fn view_formatter_names_follow_projection() {
        let options = RenderOptions::default();
        assert_eq!(
            ViewFormatter::new(Projection::Code, options.clone(), false).name(),
            "code-view"
        );
        assert_eq!(
            ViewFormatter::new(Projection::Explanation, options, false).name(),
            "explanation-view"
        );
    }

    #[test]
    fn explanation_view_text() {
        let formatter =
            ViewFormatter::new(Projection::Explanation, RenderOptions::default(), false);
        let text = formatter
            .serialize(&segment("***Why.*** Use `let` here.\n```js\nlet x;\n```"))
            .unwrap();
        assert_eq!(text, "Why. Use let here.\n");
    }
}
