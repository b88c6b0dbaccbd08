//! Prompt variant comparison
//!
//! Each variant is detected, refined and scored on its own; the outcome does
//! not depend on evaluation order. Every tie goes to the lowest index.

use super::result::{
    ComparisonResult, MetricComparison, MetricDirection, MetricValue, VariantResult,
};
use crate::core::error::DomainError;
use crate::quality::evaluator::PromptEvaluator;
use crate::quality::scorer::QualityScorer;
use crate::registry::DomainRegistry;
use std::sync::Arc;
use tracing::debug;

/// Gap in overall score under which the summary calls the result marginal
pub const MARGINAL_GAP: f64 = 0.05;

/// Metrics reported for every comparison, in output order
pub const METRICS: [(&str, MetricDirection); 6] = [
    ("overall", MetricDirection::HigherIsBetter),
    ("clarity", MetricDirection::HigherIsBetter),
    ("specificity", MetricDirection::HigherIsBetter),
    ("structure", MetricDirection::HigherIsBetter),
    ("completeness", MetricDirection::HigherIsBetter),
    // Fewer rewrites needed
    ("rules_applied", MetricDirection::LowerIsBetter),
];

/// Compares two or more prompt variants.
pub struct PromptComparator {
    registry: Arc<DomainRegistry>,
    evaluator: Arc<dyn PromptEvaluator>,
    scorer: QualityScorer,
}

impl PromptComparator {
    pub fn new(registry: Arc<DomainRegistry>, evaluator: Arc<dyn PromptEvaluator>) -> Self {
        let scorer = QualityScorer::new(registry.clone());
        Self {
            registry,
            evaluator,
            scorer,
        }
    }

    /// Compare `variants`.
    ///
    /// `test_input`, when given, fills `{{input}}` and `{input}` placeholders
    /// in every variant before evaluation.
    pub fn compare<S: AsRef<str>>(
        &self,
        variants: &[S],
        test_input: Option<&str>,
    ) -> Result<ComparisonResult, DomainError> {
        if variants.len() < 2 {
            return Err(DomainError::InvalidInput(
                "at least 2 variants required".to_string(),
            ));
        }

        let results: Vec<VariantResult> = variants
            .iter()
            .enumerate()
            .map(|(index, variant)| {
                let prompt = fill_placeholders(variant.as_ref(), test_input);
                self.evaluate_variant(index, prompt)
            })
            .collect();

        let metrics: Vec<MetricComparison> = METRICS
            .iter()
            .map(|&(name, direction)| compare_metric(&results, name, direction))
            .collect();

        // METRICS[0] is overall
        let winner = metrics[0].winner.clone();
        let summary = summarize(&results, &winner);
        debug!(winner = %winner, variants = results.len(), "comparison complete");

        Ok(ComparisonResult {
            variants: results,
            winner,
            metrics,
            summary,
            test_input: test_input.map(str::to_string),
        })
    }

    fn evaluate_variant(&self, index: usize, prompt: String) -> VariantResult {
        let domain = self.registry.detect_domain(&prompt, None);
        let (refined, rules_applied, _) = self
            .registry
            .apply_domain_rules(&prompt, domain, None)
            .into_parts();
        let sub = self.evaluator.evaluate(&prompt, domain, None);
        let score = self.scorer.score(sub, domain);

        VariantResult {
            id: format!("variant_{}", index),
            prompt,
            domain,
            refined,
            rules_applied,
            score,
        }
    }
}

fn fill_placeholders(variant: &str, test_input: Option<&str>) -> String {
    match test_input {
        Some(input) => variant
            .replace("{{input}}", input)
            .replace("{input}", input),
        None => variant.to_string(),
    }
}

fn compare_metric(
    variants: &[VariantResult],
    name: &str,
    direction: MetricDirection,
) -> MetricComparison {
    let values: Vec<MetricValue> = variants
        .iter()
        .map(|v| MetricValue {
            variant: v.id.clone(),
            value: v.metric(name).unwrap_or(0.0),
        })
        .collect();

    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if direction.beats(value.value, values[best].value) {
            best = i;
        }
    }

    let mut sorted: Vec<f64> = values.iter().map(|v| v.value).collect();
    sorted.sort_by(|a, b| b.total_cmp(a));
    if direction == MetricDirection::LowerIsBetter {
        sorted.reverse();
    }
    let significance = match sorted.as_slice() {
        [first, second, ..] => (first - second).abs(),
        _ => 0.0,
    };

    MetricComparison {
        name: name.to_string(),
        direction,
        winner: values[best].variant.clone(),
        values,
        significance,
    }
}

fn summarize(variants: &[VariantResult], winner: &str) -> String {
    let Some(best) = variants.iter().find(|v| v.id == winner) else {
        return String::new();
    };
    let runner_up = variants
        .iter()
        .filter(|v| v.id != winner)
        .max_by(|a, b| a.score.overall().total_cmp(&b.score.overall()));

    let mut summary = format!(
        "{} wins with an overall score of {:.1}%.",
        best.id,
        best.score.overall() * 100.0
    );
    if let Some(runner_up) = runner_up {
        let gap = best.score.overall() - runner_up.score.overall();
        if gap < MARGINAL_GAP {
            summary.push_str(&format!(
                " This is a marginal call: {} is within {:.1} points.",
                runner_up.id,
                gap * 100.0
            ));
        } else {
            summary.push_str(&format!(
                " It leads {} by {:.1} points.",
                runner_up.id,
                gap * 100.0
            ));
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::AnalysisResult;
    use crate::core::domain::Domain;
    use crate::quality::evaluator::HeuristicEvaluator;
    use crate::quality::score::SubScores;

    /// Scores by prompt length, capped at 100 characters
    struct LengthEvaluator;

    impl PromptEvaluator for LengthEvaluator {
        fn evaluate(&self, prompt: &str, _: Domain, _: Option<&AnalysisResult>) -> SubScores {
            SubScores::splat((prompt.len() as f64 / 100.0).min(1.0))
        }
    }

    /// Returns the configured sub-scores for prompts containing each key
    struct FixedEvaluator(Vec<(&'static str, SubScores)>);

    impl PromptEvaluator for FixedEvaluator {
        fn evaluate(&self, prompt: &str, _: Domain, _: Option<&AnalysisResult>) -> SubScores {
            self.0
                .iter()
                .find(|(key, _)| prompt.contains(key))
                .map(|(_, s)| *s)
                .unwrap_or_default()
        }
    }

    fn comparator(evaluator: impl PromptEvaluator + 'static) -> PromptComparator {
        PromptComparator::new(
            Arc::new(DomainRegistry::with_builtin_domains().unwrap()),
            Arc::new(evaluator),
        )
    }

    #[test]
    fn test_requires_two_variants() {
        let comparator = comparator(HeuristicEvaluator::new());
        let empty: [&str; 0] = [];
        for variants in [&empty[..], &["only one"][..]] {
            let err = comparator.compare(variants, None).unwrap_err();
            assert_eq!(
                err,
                DomainError::InvalidInput("at least 2 variants required".to_string())
            );
        }
        assert!(comparator.compare(&["a", "b"], None).is_ok());
    }

    #[test]
    fn test_detailed_prompt_wins() {
        let result = comparator(LengthEvaluator)
            .compare(
                &[
                    "Short prompt",
                    "This is a more detailed and comprehensive prompt with better specifications",
                ],
                None,
            )
            .unwrap();
        assert_eq!(result.winner, "variant_1");
        assert_eq!(result.variants[0].id, "variant_0");
        assert_eq!(result.winning_variant().unwrap().id, "variant_1");
    }

    #[test]
    fn test_identical_variants_pick_first() {
        let result = comparator(HeuristicEvaluator::new())
            .compare(&["Same prompt text.", "Same prompt text."], None)
            .unwrap();
        assert_eq!(result.winner, "variant_0");
        for metric in &result.metrics {
            assert_eq!(metric.winner, "variant_0");
            assert_eq!(metric.significance, 0.0);
        }
        assert!(result.summary.contains("marginal"));
    }

    #[test]
    fn test_metrics_order_direction_and_significance() {
        let evaluator = FixedEvaluator(vec![
            ("alpha", SubScores::new(0.9, 0.2, 0.5, 0.5)),
            ("beta", SubScores::new(0.4, 0.8, 0.5, 0.5)),
        ]);
        let result = comparator(evaluator)
            .compare(&["alpha prompt", "beta prompt"], None)
            .unwrap();

        let names: Vec<_> = result.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["overall", "clarity", "specificity", "structure", "completeness", "rules_applied"]
        );

        let clarity = result.metric("clarity").unwrap();
        assert_eq!(clarity.winner, "variant_0");
        assert!((clarity.significance - 0.5).abs() < 1e-9);

        let specificity = result.metric("specificity").unwrap();
        assert_eq!(specificity.winner, "variant_1");

        let rules = result.metric("rules_applied").unwrap();
        assert_eq!(rules.direction, MetricDirection::LowerIsBetter);
    }

    #[test]
    fn test_rules_applied_lower_wins() {
        // Only the first variant triggers SQL rewrites
        let result = comparator(LengthEvaluator)
            .compare(
                &["hazme una bonita tabla para usuarios", "Summarize this article."],
                None,
            )
            .unwrap();
        assert!(!result.variants[0].rules_applied.is_empty());
        assert!(result.variants[1].rules_applied.is_empty());
        assert_eq!(result.metric("rules_applied").unwrap().winner, "variant_1");
    }

    #[test]
    fn test_test_input_fills_placeholders() {
        let result = comparator(LengthEvaluator)
            .compare(
                &["Translate {{input}} to French.", "Summarize {input} briefly."],
                Some("the report"),
            )
            .unwrap();
        assert_eq!(result.variants[0].prompt, "Translate the report to French.");
        assert_eq!(result.variants[1].prompt, "Summarize the report briefly.");
        assert_eq!(result.test_input.as_deref(), Some("the report"));
    }

    #[test]
    fn test_variant_domains_are_detected_independently() {
        let result = comparator(HeuristicEvaluator::new())
            .compare(
                &[
                    "Write a SQL query joining the orders table",
                    "Set up a CI/CD pipeline with Docker and Kubernetes",
                ],
                None,
            )
            .unwrap();
        assert_eq!(result.variants[0].domain, Domain::Sql);
        assert_eq!(result.variants[1].domain, Domain::Devops);
    }

    #[test]
    fn test_clear_winner_summary() {
        let evaluator = FixedEvaluator(vec![
            ("weak", SubScores::splat(0.2)),
            ("strong", SubScores::splat(0.9)),
        ]);
        let result = comparator(evaluator)
            .compare(&["weak prompt", "strong prompt"], None)
            .unwrap();
        assert_eq!(result.winner, "variant_1");
        assert!(result.summary.starts_with("variant_1 wins with an overall score of 90.0%"));
        assert!(!result.summary.contains("marginal"));
        assert!((result.metric("overall").unwrap().significance - 0.7).abs() < 1e-9);
    }
}
