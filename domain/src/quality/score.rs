//! Quality score value objects

use crate::registry::config::QualityWeights;
use serde::{Deserialize, Serialize};

/// Raw per-dimension inputs to the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubScores {
    pub clarity: f64,
    pub specificity: f64,
    pub structure: f64,
    pub completeness: f64,
}

impl SubScores {
    pub fn new(clarity: f64, specificity: f64, structure: f64, completeness: f64) -> Self {
        Self {
            clarity,
            specificity,
            structure,
            completeness,
        }
    }

    /// Same value in every dimension
    pub fn splat(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Dimension names paired with their values, in canonical order
    pub fn dimensions(&self) -> [(&'static str, f64); 4] {
        [
            ("clarity", self.clarity),
            ("specificity", self.specificity),
            ("structure", self.structure),
            ("completeness", self.completeness),
        ]
    }
}

/// Four-dimensional quality assessment plus the weighted overall.
///
/// Every field is in `[0, 1]`. `overall` is always derived from the
/// sub-scores and the domain weights; there is no way to set it directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityScore {
    clarity: f64,
    specificity: f64,
    structure: f64,
    completeness: f64,
    overall: f64,
}

impl QualityScore {
    /// `sub` must already be within `[0, 1]`
    pub(crate) fn compute(sub: SubScores, weights: &QualityWeights) -> Self {
        let overall = sub.clarity * weights.clarity
            + sub.specificity * weights.specificity
            + sub.structure * weights.structure
            + sub.completeness * weights.completeness;

        Self {
            clarity: sub.clarity,
            specificity: sub.specificity,
            structure: sub.structure,
            completeness: sub.completeness,
            overall: overall.clamp(0.0, 1.0),
        }
    }

    pub fn clarity(&self) -> f64 {
        self.clarity
    }

    pub fn specificity(&self) -> f64 {
        self.specificity
    }

    pub fn structure(&self) -> f64 {
        self.structure
    }

    pub fn completeness(&self) -> f64 {
        self.completeness
    }

    pub fn overall(&self) -> f64 {
        self.overall
    }

    pub fn sub_scores(&self) -> SubScores {
        SubScores::new(
            self.clarity,
            self.specificity,
            self.structure,
            self.completeness,
        )
    }

    /// Same sub-scores, overall recomputed under different weights
    pub fn reweighted(&self, weights: &QualityWeights) -> Self {
        Self::compute(self.sub_scores(), weights)
    }

    /// Look up a metric by name (`overall` or a dimension name)
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            "overall" => Some(self.overall),
            "clarity" => Some(self.clarity),
            "specificity" => Some(self.specificity),
            "structure" => Some(self.structure),
            "completeness" => Some(self.completeness),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights_average() {
        let score = QualityScore::compute(
            SubScores::new(0.2, 0.4, 0.6, 0.8),
            &QualityWeights::uniform(),
        );
        assert!((score.overall() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_reweighted_recomputes_overall() {
        let score = QualityScore::compute(
            SubScores::new(1.0, 0.0, 0.0, 0.0),
            &QualityWeights::uniform(),
        );
        assert!((score.overall() - 0.25).abs() < 1e-12);

        let clarity_only = QualityWeights::new(1.0, 0.0, 0.0, 0.0);
        let reweighted = score.reweighted(&clarity_only);
        assert!((reweighted.overall() - 1.0).abs() < 1e-12);
        assert_eq!(reweighted.sub_scores(), score.sub_scores());
    }

    #[test]
    fn test_metric_lookup() {
        let score = QualityScore::compute(SubScores::splat(0.5), &QualityWeights::uniform());
        assert_eq!(score.metric("clarity"), Some(0.5));
        assert!(score.metric("overall").is_some());
        assert_eq!(score.metric("vibes"), None);
    }
}
