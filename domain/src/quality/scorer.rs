//! Weighted quality scoring

use super::score::{QualityScore, SubScores};
use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::registry::DomainRegistry;
use std::sync::Arc;
use tracing::debug;

/// Combines sub-scores with the domain's quality weights.
#[derive(Debug, Clone)]
pub struct QualityScorer {
    registry: Arc<DomainRegistry>,
}

impl QualityScorer {
    pub fn new(registry: Arc<DomainRegistry>) -> Self {
        Self { registry }
    }

    /// Score leniently: out-of-range inputs are clamped into `[0, 1]` and
    /// NaN counts as 0.
    ///
    /// Analyzer output is not validated upstream, so this is the entry point
    /// for sub-scores of unknown provenance.
    pub fn score(&self, sub: SubScores, domain: Domain) -> QualityScore {
        let clamped = SubScores::new(
            clamp_unit(sub.clarity),
            clamp_unit(sub.specificity),
            clamp_unit(sub.structure),
            clamp_unit(sub.completeness),
        );
        if clamped != sub {
            debug!(domain = %domain, raw = ?sub, "sub-scores clamped into [0, 1]");
        }
        QualityScore::compute(clamped, &self.registry.get_quality_weights(domain))
    }

    /// Score strictly: any input outside `[0, 1]` (or NaN) is rejected.
    pub fn try_score(&self, sub: SubScores, domain: Domain) -> Result<QualityScore, DomainError> {
        for (name, value) in sub.dimensions() {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::InvalidInput(format!(
                    "{} sub-score must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(QualityScore::compute(
            sub,
            &self.registry.get_quality_weights(domain),
        ))
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
