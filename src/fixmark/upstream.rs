//! Payloads of the prediction and scoring services
//!
//! The segmenter only ever sees a string; these types are the thin layer that pulls that
//! string out of a prediction response, and that reads the opaque score numbers back for
//! display. No transport lives here.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors decoding a service payload
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Response of a prediction endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    #[serde(default)]
    pub predicted_category: Option<String>,
    /// Free-form model output, consumed verbatim by the segmenter
    pub generated_fix: String,
}

impl PredictionResponse {
    pub fn from_json(json: &str) -> Result<Self, UpstreamError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// CodeBLEU component scores, each in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeBleuScores {
    pub ngram_match_score: f64,
    pub weighted_ngram_match_score: f64,
    pub syntax_match: f64,
    pub semantic_match: f64,
    pub codebleu_score: f64,
}

impl CodeBleuScores {
    /// Label/value pairs in display order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Ngram Match Score", self.ngram_match_score),
            ("Weighted Ngram Match Score", self.weighted_ngram_match_score),
            ("Syntax Match", self.syntax_match),
            ("Semantic Match", self.semantic_match),
            ("CodeBLEU Score", self.codebleu_score),
        ]
    }
}

/// Response of the scoring service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(default)]
    pub codebleu: Option<CodeBleuScores>,
}

impl ScoreResponse {
    pub fn from_json(json: &str) -> Result<Self, UpstreamError> {
        Ok(serde_json::from_str(json)?)
    }

    /// One `Label: NN.NN%` line per score
    pub fn report(&self) -> String {
        let Some(scores) = &self.codebleu else {
            return "No results yet.\n".to_string();
        };
        let mut out = String::new();
        for (label, value) in scores.entries() {
            let _ = writeln!(out, "{label}: {:.2}%", value * 100.0);
        }
        out
    }
}
