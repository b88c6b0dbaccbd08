//! Prompt store port
//!
//! Persists refined prompts together with their metadata and score so they
//! can be searched later.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use refinery_domain::{Domain, QualityScore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Context saved alongside a refined prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub original: String,
    pub domain: Domain,
    #[serde(default)]
    pub rules_applied: Vec<String>,
}

/// Persisted copy of a [`QualityScore`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub clarity: f64,
    pub specificity: f64,
    pub structure: f64,
    pub completeness: f64,
    pub overall: f64,
}

impl From<&QualityScore> for ScoreSnapshot {
    fn from(score: &QualityScore) -> Self {
        Self {
            clarity: score.clarity(),
            specificity: score.specificity(),
            structure: score.structure(),
            completeness: score.completeness(),
            overall: score.overall(),
        }
    }
}

/// A saved refinement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPrompt {
    /// `prm-<n>`
    pub id: String,
    pub refined: String,
    pub metadata: PromptMetadata,
    pub score: ScoreSnapshot,
    pub created_at: DateTime<Utc>,
}

/// Filters for [`PromptStore::search`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub domain: Option<Domain>,
    /// Case-insensitive substring of the refined or original text
    pub text: Option<String>,
    /// Minimum overall score
    pub min_score: Option<f64>,
    pub limit: Option<usize>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `prompt` passes every filter (the limit is not a filter)
    pub fn matches(&self, prompt: &StoredPrompt) -> bool {
        if self.domain.is_some_and(|d| d != prompt.metadata.domain) {
            return false;
        }
        if self.min_score.is_some_and(|min| prompt.score.overall < min) {
            return false;
        }
        match &self.text {
            Some(text) => {
                let needle = text.to_lowercase();
                prompt.refined.to_lowercase().contains(&needle)
                    || prompt.metadata.original.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

/// Storage for refined prompts
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Persist a refinement and return the stored record
    async fn save(
        &self,
        refined: &str,
        metadata: PromptMetadata,
        score: &QualityScore,
    ) -> Result<StoredPrompt, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<StoredPrompt>, StoreError>;

    /// Matching prompts, newest first, truncated to `criteria.limit`
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<StoredPrompt>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(domain: Domain, refined: &str, overall: f64) -> StoredPrompt {
        StoredPrompt {
            id: "prm-1".to_string(),
            refined: refined.to_string(),
            metadata: PromptMetadata {
                original: "hazme una tabla".to_string(),
                domain,
                rules_applied: vec![],
            },
            score: ScoreSnapshot {
                clarity: overall,
                specificity: overall,
                structure: overall,
                completeness: overall,
                overall,
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        assert!(SearchCriteria::new().matches(&stored(Domain::Cine, "anything", 0.0)));
    }

    #[test]
    fn test_domain_and_score_filters() {
        let prompt = stored(Domain::Sql, "Generate a database schema", 0.6);
        assert!(SearchCriteria::new().with_domain(Domain::Sql).matches(&prompt));
        assert!(!SearchCriteria::new().with_domain(Domain::Saas).matches(&prompt));
        assert!(SearchCriteria::new().with_min_score(0.6).matches(&prompt));
        assert!(!SearchCriteria::new().with_min_score(0.61).matches(&prompt));
    }

    #[test]
    fn test_text_filter_checks_refined_and_original() {
        let prompt = stored(Domain::Sql, "Generate a database schema", 0.5);
        assert!(SearchCriteria::new().with_text("SCHEMA").matches(&prompt));
        assert!(SearchCriteria::new().with_text("tabla").matches(&prompt));
        assert!(!SearchCriteria::new().with_text("kubernetes").matches(&prompt));
    }
}
