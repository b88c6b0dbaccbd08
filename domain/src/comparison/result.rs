//! Comparison result value objects

use crate::core::domain::Domain;
use crate::quality::score::QualityScore;
use serde::Serialize;

/// Which way a metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDirection {
    HigherIsBetter,
    LowerIsBetter,
}

impl MetricDirection {
    /// True when `candidate` strictly beats `current`
    pub fn beats(&self, candidate: f64, current: f64) -> bool {
        match self {
            MetricDirection::HigherIsBetter => candidate > current,
            MetricDirection::LowerIsBetter => candidate < current,
        }
    }
}

/// One evaluated variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantResult {
    /// `variant_<index>` in input order
    pub id: String,
    /// Prompt text as evaluated (placeholders filled)
    pub prompt: String,
    pub domain: Domain,
    /// What the domain rules would turn the prompt into
    pub refined: String,
    pub rules_applied: Vec<String>,
    /// Score of the prompt as written
    pub score: QualityScore,
}

impl VariantResult {
    /// Value of a named metric for this variant
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            "rules_applied" => Some(self.rules_applied.len() as f64),
            other => self.score.metric(other),
        }
    }
}

/// A variant's value for one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricValue {
    pub variant: String,
    pub value: f64,
}

/// Per-metric breakdown across all variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub name: String,
    pub direction: MetricDirection,
    /// In variant order
    pub values: Vec<MetricValue>,
    /// Id of the best variant for this metric (ties: lowest index)
    pub winner: String,
    /// Absolute gap between the best and second-best values
    pub significance: f64,
}

/// Outcome of comparing prompt variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub variants: Vec<VariantResult>,
    /// Id of the variant with the highest overall score
    pub winner: String,
    pub metrics: Vec<MetricComparison>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_input: Option<String>,
}

impl ComparisonResult {
    pub fn winning_variant(&self) -> Option<&VariantResult> {
        self.variants.iter().find(|v| v.id == self.winner)
    }

    pub fn metric(&self, name: &str) -> Option<&MetricComparison> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_beats_is_strict() {
        assert!(MetricDirection::HigherIsBetter.beats(0.6, 0.5));
        assert!(!MetricDirection::HigherIsBetter.beats(0.5, 0.5));
        assert!(MetricDirection::LowerIsBetter.beats(1.0, 3.0));
        assert!(!MetricDirection::LowerIsBetter.beats(3.0, 3.0));
    }

    #[test]
    fn test_direction_serializes_snake_case() {
        let json = serde_json::to_string(&MetricDirection::LowerIsBetter).unwrap();
        assert_eq!(json, "\"lower_is_better\"");
    }
}
