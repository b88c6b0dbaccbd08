//! Declarative per-domain configuration

use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::rules::library::PatternLibrary;
use crate::rules::pattern::compile;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tolerance for the weights-sum-to-one invariant
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Domain-calibrated weights of the four quality dimensions.
///
/// Must sum to 1.0 (within [`WEIGHT_EPSILON`]); invalid weights are rejected,
/// never renormalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityWeights {
    pub clarity: f64,
    pub specificity: f64,
    pub structure: f64,
    pub completeness: f64,
}

impl QualityWeights {
    pub fn new(clarity: f64, specificity: f64, structure: f64, completeness: f64) -> Self {
        Self {
            clarity,
            specificity,
            structure,
            completeness,
        }
    }

    /// 0.25 for every dimension
    pub fn uniform() -> Self {
        Self::new(0.25, 0.25, 0.25, 0.25)
    }

    pub fn sum(&self) -> f64 {
        self.clarity + self.specificity + self.structure + self.completeness
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let all = [
            ("clarity", self.clarity),
            ("specificity", self.specificity),
            ("structure", self.structure),
            ("completeness", self.completeness),
        ];
        for (name, value) in all {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::Configuration(format!(
                    "quality weight '{}' must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(DomainError::Configuration(format!(
                "quality weights must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

/// A before/after illustration of what the domain rules do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainExample {
    pub before: String,
    pub after: String,
    pub explanation: String,
    pub score_improvement: f64,
}

impl DomainExample {
    pub fn new(
        before: impl Into<String>,
        after: impl Into<String>,
        explanation: impl Into<String>,
        score_improvement: f64,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            explanation: explanation.into(),
            score_improvement,
        }
    }
}

/// System-prompt addendum selected by the analyzer's technical terms.
#[derive(Debug, Clone, PartialEq)]
pub struct TermAddendum {
    /// Lowercase keywords; any technical term containing one selects the addendum
    pub keywords: Vec<String>,
    pub text: String,
}

impl TermAddendum {
    pub fn new<I, S>(keywords: I, text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
            text: text.into(),
        }
    }

    pub fn matches(&self, terms: &[String]) -> bool {
        terms.iter().any(|term| {
            let term = term.to_lowercase();
            self.keywords.iter().any(|k| term.contains(k.as_str()))
        })
    }
}

/// Everything the registry knows about one domain.
#[derive(Debug, Clone)]
pub struct DomainConfig {
    pub domain: Domain,
    pub description: String,
    pub rules: PatternLibrary,
    pub detection_patterns: Vec<Regex>,
    pub quality_weights: QualityWeights,
    pub system_prompt_template: String,
    pub term_addenda: Vec<TermAddendum>,
    pub examples: Vec<DomainExample>,
}

impl DomainConfig {
    /// Start a config with no rules, no detection patterns and uniform weights
    pub fn new(domain: Domain, description: impl Into<String>) -> Self {
        Self {
            domain,
            description: description.into(),
            rules: PatternLibrary::empty(),
            detection_patterns: Vec::new(),
            quality_weights: QualityWeights::uniform(),
            system_prompt_template: String::new(),
            term_addenda: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: PatternLibrary) -> Self {
        self.rules = rules;
        self
    }

    /// Compile and set detection patterns
    pub fn with_detection_patterns(mut self, patterns: &[&str]) -> Result<Self, DomainError> {
        self.detection_patterns = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| compile(&format!("{}_detection_{}", self.domain, i), p))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    pub fn with_weights(mut self, weights: QualityWeights) -> Self {
        self.quality_weights = weights;
        self
    }

    pub fn with_system_prompt(mut self, template: impl Into<String>) -> Self {
        self.system_prompt_template = template.into();
        self
    }

    pub fn with_addendum(mut self, addendum: TermAddendum) -> Self {
        self.term_addenda.push(addendum);
        self
    }

    pub fn with_example(mut self, example: DomainExample) -> Self {
        self.examples.push(example);
        self
    }

    /// Check invariants enforced at registration time
    pub fn validate(&self) -> Result<(), DomainError> {
        self.quality_weights
            .validate()
            .map_err(|e| e.for_domain(self.domain))?;
        if self.system_prompt_template.trim().is_empty() {
            return Err(DomainError::Configuration(format!(
                "domain '{}': system prompt template is empty",
                self.domain
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights_are_valid() {
        assert!(QualityWeights::uniform().validate().is_ok());
    }

    #[test]
    fn test_weights_not_summing_to_one_rejected() {
        let err = QualityWeights::new(0.5, 0.5, 0.5, 0.5).validate().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(QualityWeights::new(-0.25, 0.5, 0.5, 0.25).validate().is_err());
    }

    #[test]
    fn test_term_addendum_matching() {
        let addendum = TermAddendum::new(["aws", "azure"], "Cloud note");
        assert!(addendum.matches(&["AWS Lambda".to_string()]));
        assert!(!addendum.matches(&["docker".to_string()]));
        assert!(!addendum.matches(&[]));
    }

    #[test]
    fn test_validate_names_domain() {
        let config = DomainConfig::new(Domain::Sql, "SQL")
            .with_system_prompt("You are a database expert.")
            .with_weights(QualityWeights::new(0.4, 0.4, 0.4, 0.4));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("domain 'sql'"));
    }

    #[test]
    fn test_empty_template_rejected() {
        let config = DomainConfig::new(Domain::Saas, "SaaS");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_detection_pattern_rejected() {
        let result = DomainConfig::new(Domain::Cine, "Film").with_detection_patterns(&["(film"]);
        assert!(result.is_err());
    }
}
