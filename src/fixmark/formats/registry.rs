//! Format registry for segment sequences
//!
//! This module provides a pluggable registry of output formats. Each format implements the
//! `Formatter` trait and can be registered with `FormatRegistry`.

use std::collections::HashMap;

use thiserror::Error;

use crate::fixmark::projection::{Projection, RenderOptions};
use crate::fixmark::segment::SegmentSequence;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for segment sequence formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tag", "code-view")
    fn name(&self) -> &str;

    /// Serialize a sequence to this format
    fn serialize(&self, sequence: &SegmentSequence) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a sequence using the named format
    pub fn serialize(&self, sequence: &SegmentSequence, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        tracing::debug!(format, "serializing segments");
        formatter.serialize(sequence)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        Self::with_options(RenderOptions::default(), false)
    }

    /// Built-in formatters, with views rendered using `options` and optional ANSI styling
    pub fn with_options(options: RenderOptions, styled: bool) -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TagFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::CodeFormatter);
        registry.register(super::ViewFormatter::new(
            Projection::Code,
            options.clone(),
            styled,
        ));
        registry.register(super::ViewFormatter::new(
            Projection::Explanation,
            options,
            styled,
        ));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixmark::segmenter::segment;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _sequence: &SegmentSequence) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.get("test").map(|f| f.description()), Some("Test formatter"));
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let result = registry.serialize(&segment("x"), "test");
        assert_eq!(result, Ok("test output".to_string()));
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let result = registry.serialize(&segment("x"), "nonexistent");
        assert_eq!(
            result,
            Err(FormatError::FormatNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_default_formats() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec![
                "code",
                "code-view",
                "explanation-view",
                "json",
                "tag",
                "treeviz",
                "yaml"
            ]
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormatError::FormatNotFound("x".into()).to_string(),
            "Format 'x' not found"
        );
    }
}
