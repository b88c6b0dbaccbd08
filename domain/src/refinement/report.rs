//! Refinement report value objects

use crate::config::validation::Severity;
use crate::core::domain::Domain;
use crate::quality::score::QualityScore;
use serde::Serialize;

/// How the working domain was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainSource {
    /// Named by the caller
    Explicit,
    /// Resolved by the detector
    Detected,
}

impl std::fmt::Display for DomainSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainSource::Explicit => write!(f, "explicit"),
            DomainSource::Detected => write!(f, "detected"),
        }
    }
}

/// A structural problem found in a refined prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Short machine-readable id, e.g. `select_star`
    pub rule: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn warning(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            rule: rule.into(),
            message: message.into(),
        }
    }

    pub fn error(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Everything produced by refining one prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefinementReport {
    pub original: String,
    pub refined: String,
    pub domain: Domain,
    pub domain_source: DomainSource,
    pub rules_applied: Vec<String>,
    pub improvements: Vec<String>,
    pub system_prompt: String,
    pub original_score: QualityScore,
    pub refined_score: QualityScore,
    pub validation_issues: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_id: Option<String>,
}

impl RefinementReport {
    /// Refined overall minus original overall
    pub fn score_delta(&self) -> f64 {
        self.refined_score.overall() - self.original_score.overall()
    }

    pub fn is_unchanged(&self) -> bool {
        self.rules_applied.is_empty()
    }
}
