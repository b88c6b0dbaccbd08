//! Analyzer output consumed by detection and the general fallback engine

use serde::{Deserialize, Serialize};

/// Per-prompt NLP signal produced by an external analyzer.
///
/// Read-only input to the core. Scores are expected in `[0, 1]` but are not
/// validated upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Structural/semantic complexity (0.0 to 1.0)
    pub complexity: f64,
    /// How ambiguous the wording is (0.0 to 1.0)
    pub ambiguity_score: f64,
    /// Free-form hints such as "database" or "branding"
    pub domain_hints: Vec<String>,
    /// Technical vocabulary found in the prompt
    pub technical_terms: Vec<String>,
    /// Sentiment polarity (-1.0 to 1.0)
    pub sentiment: f64,
    /// Readability (0.0 to 1.0, higher is easier)
    pub readability: f64,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_complexity(mut self, complexity: f64) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_ambiguity(mut self, ambiguity: f64) -> Self {
        self.ambiguity_score = ambiguity;
        self
    }

    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_hints = hints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_technical_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technical_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive membership test against `technical_terms`
    pub fn has_technical_term(&self, term: &str) -> bool {
        self.technical_terms
            .iter()
            .any(|t| t.eq_ignore_ascii_case(term))
    }
}
