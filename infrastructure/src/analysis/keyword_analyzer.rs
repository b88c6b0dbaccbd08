//! Keyword-table prompt analyzer
//!
//! Token heuristics only; no model calls. Complexity grows with length and
//! clause count, ambiguity with the share of vague words, and domain hints
//! and technical terms come from fixed keyword tables.

use async_trait::async_trait;
use refinery_application::ports::analyzer::{Analyzer, AnalyzerError};
use refinery_domain::AnalysisResult;
use refinery_domain::core::string::is_vague_word;
use regex::Regex;
use tracing::debug;

/// Words per full point of length-driven complexity
const WORDS_FOR_FULL_LENGTH: f64 = 80.0;
/// Complexity added per extra clause
const CLAUSE_WEIGHT: f64 = 0.1;

/// Token -> hint understood by domain detection
const HINT_WORDS: &[(&str, &str)] = &[
    ("database", "database"),
    ("tabla", "database"),
    ("table", "database"),
    ("query", "query"),
    ("consulta", "query"),
    ("sql", "sql"),
    ("logo", "logo"),
    ("brand", "brand"),
    ("marca", "brand"),
    ("marketing", "marketing"),
    ("video", "video"),
    ("film", "film"),
    ("movie", "movie"),
    ("pelicula", "film"),
    ("película", "film"),
    ("screenplay", "screenplay"),
    ("saas", "saas"),
    ("startup", "startup"),
    ("subscription", "subscription"),
    ("suscripción", "subscription"),
    ("devops", "devops"),
    ("deploy", "deployment"),
    ("deployment", "deployment"),
    ("despliegue", "deployment"),
    ("docker", "containers"),
    ("kubernetes", "containers"),
    ("k8s", "containers"),
    ("ci/cd", "ci/cd"),
    ("cloud", "cloud"),
];

/// Technical vocabulary reported verbatim (lowercased)
const TECHNICAL_TERMS: &[&str] = &[
    "postgres", "postgresql", "mysql", "sqlite", "oracle", "sql server", "redis",
    "stripe", "paddle", "chargebee", "graphql", "react",
    "aws", "azure", "gcp", "google cloud", "digitalocean", "kubernetes", "docker", "terraform",
    "instagram", "tiktok", "linkedin",
    "drone", "gimbal", "arri", "blackmagic", "premiere", "davinci", "after effects",
];

const POSITIVE_WORDS: &[&str] = &[
    "great", "love", "excellent", "happy", "best", "amazing", "nice", "good", "bonito", "bonita",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "hate", "terrible", "broken", "worst", "slow", "ugly", "fail", "malo", "mala",
];

/// [`Analyzer`] driven by keyword tables.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    technical: Regex,
    clause_breaks: Regex,
}

impl KeywordAnalyzer {
    pub fn new() -> Result<Self, AnalyzerError> {
        let alternation = TECHNICAL_TERMS
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let technical = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
            .map_err(|e| AnalyzerError::Failed(e.to_string()))?;
        let clause_breaks = Regex::new(r"(?i)[,;:]|\b(?:and|then|y|luego|with|con)\b")
            .map_err(|e| AnalyzerError::Failed(e.to_string()))?;
        Ok(Self {
            technical,
            clause_breaks,
        })
    }

    /// Synchronous analysis used by the port implementation
    pub fn analyze_text(&self, prompt: &str) -> AnalysisResult {
        let lowered = prompt.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '/' || c == '-'))
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return AnalysisResult::new();
        }
        let count = words.len() as f64;

        let clauses = self.clause_breaks.find_iter(&lowered).count() as f64;
        let complexity = (count / WORDS_FOR_FULL_LENGTH + clauses * CLAUSE_WEIGHT).min(1.0);

        let vague = words.iter().filter(|w| is_vague_word(w)).count() as f64;
        let ambiguity = (vague * 4.0 / count).min(1.0);

        let mut hints: Vec<&str> = Vec::new();
        for word in &words {
            if let Some((_, hint)) = HINT_WORDS.iter().find(|(key, _)| key == word)
                && !hints.contains(hint)
            {
                hints.push(hint);
            }
        }

        let mut terms: Vec<String> = Vec::new();
        for m in self.technical.find_iter(&lowered) {
            let term = m.as_str().to_string();
            if !terms.contains(&term) {
                terms.push(term);
            }
        }

        let positive = words.iter().filter(|w| POSITIVE_WORDS.contains(*w)).count() as f64;
        let negative = words.iter().filter(|w| NEGATIVE_WORDS.contains(*w)).count() as f64;
        let sentiment = if positive + negative > 0.0 {
            (positive - negative) / (positive + negative)
        } else {
            0.0
        };

        let avg_len = words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / count;
        let readability = (1.0 - (avg_len - 4.0).max(0.0) / 6.0).clamp(0.0, 1.0);

        let mut result = AnalysisResult::new()
            .with_complexity(complexity)
            .with_ambiguity(ambiguity)
            .with_hints(hints)
            .with_technical_terms(terms);
        result.sentiment = sentiment;
        result.readability = readability;

        debug!(
            complexity = result.complexity,
            ambiguity = result.ambiguity_score,
            hints = ?result.domain_hints,
            "prompt analyzed"
        );
        result
    }
}

#[async_trait]
impl Analyzer for KeywordAnalyzer {
    async fn analyze(&self, prompt: &str) -> Result<AnalysisResult, AnalyzerError> {
        Ok(self.analyze_text(prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> KeywordAnalyzer {
        KeywordAnalyzer::new().unwrap()
    }

    #[test]
    fn test_empty_prompt_is_neutral() {
        assert_eq!(analyzer().analyze_text("  "), AnalysisResult::new());
    }

    #[test]
    fn test_hints_and_terms() {
        let result = analyzer()
            .analyze_text("Deploy the API with Docker on AWS, then add a Postgres table");
        assert_eq!(result.domain_hints, ["deployment", "containers", "database"]);
        assert_eq!(result.technical_terms, ["docker", "aws", "postgres"]);
    }

    #[test]
    fn test_vague_prompt_is_ambiguous() {
        let vague = analyzer().analyze_text("make some nice stuff");
        let precise = analyzer().analyze_text("Write a SQL query for orders placed this month");
        assert!(vague.ambiguity_score > 0.9);
        assert_eq!(precise.ambiguity_score, 0.0);
    }

    #[test]
    fn test_complexity_grows_with_clauses() {
        let simple = analyzer().analyze_text("Create a table for users");
        let complex = analyzer().analyze_text(
            "Design a multi-tenant platform with billing, auditing, and SSO; then migrate the \
             legacy data, and document every endpoint with examples and error codes",
        );
        assert!(complex.complexity > simple.complexity);
        assert!(complex.complexity > 0.7);
        assert!(simple.complexity < 0.2);
    }

    #[test]
    fn test_sentiment_polarity() {
        assert!(analyzer().analyze_text("I love this great idea").sentiment > 0.0);
        assert!(analyzer().analyze_text("the build is broken and slow").sentiment < 0.0);
        assert_eq!(analyzer().analyze_text("list the tables").sentiment, 0.0);
    }

    #[tokio::test]
    async fn test_port_matches_sync_analysis() {
        let analyzer = analyzer();
        let prompt = "give me a query for the orders placed this month";
        assert_eq!(analyzer.analyze(prompt).await.unwrap(), analyzer.analyze_text(prompt));
    }
}
