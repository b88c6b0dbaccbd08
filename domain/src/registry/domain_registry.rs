//! Domain registry: one rule engine per domain plus the general fallback

use super::config::{DomainConfig, QualityWeights};
use super::detection::{DomainDetection, HINT_BONUS, PATTERN_MATCH_WEIGHT, hint_domain};
use crate::catalog;
use crate::core::analysis::AnalysisResult;
use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::rules::engine::{RuleApplicationResult, RuleEngine};
use crate::rules::general::GeneralRuleEngine;
use tracing::debug;

/// Complexity above which the "complex project" addendum is added
pub const COMPLEXITY_THRESHOLD: f64 = 0.7;

const COMPLEX_PROJECT_ADDENDUM: &str = "This is a complex project: break the work into \
phases, state your assumptions explicitly, and call out trade-offs and risks before giving \
a final recommendation.";

#[derive(Debug, Clone)]
struct RegisteredDomain {
    config: DomainConfig,
    engine: RuleEngine,
}

/// Registry of domain configurations and their rule engines.
///
/// Built once at startup and shared read-only (typically behind an `Arc`).
/// Domains are kept in registration order, which is also the detection
/// tie-break order.
///
/// # Example
///
/// ```
/// use refinery_domain::{Domain, DomainRegistry};
///
/// let registry = DomainRegistry::with_builtin_domains().unwrap();
/// let domain = registry.detect_domain("hazme una bonita tabla para usuarios", None);
/// assert_eq!(domain, Domain::Sql);
///
/// let result = registry.apply_domain_rules("hazme una bonita tabla para usuarios", domain, None);
/// assert!(result.refined().contains("Generate a database schema for"));
/// ```
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    entries: Vec<RegisteredDomain>,
    general: DomainConfig,
    general_engine: GeneralRuleEngine,
}

impl DomainRegistry {
    /// A registry with only the general fallback
    pub fn new() -> Result<Self, DomainError> {
        let general = catalog::general::config();
        general.validate()?;
        Ok(Self {
            entries: Vec::new(),
            general,
            general_engine: GeneralRuleEngine::new()?,
        })
    }

    /// A registry with the five built-in domains, in declaration order.
    ///
    /// Fails fast on a malformed pattern or invalid weights.
    pub fn with_builtin_domains() -> Result<Self, DomainError> {
        let mut registry = Self::new()?;
        for config in catalog::builtin_configs()? {
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Register (or replace) a domain configuration.
    ///
    /// Replacing keeps the domain's original position. Registering
    /// `general` replaces the fallback config; `general` never competes in
    /// detection.
    pub fn register(&mut self, config: DomainConfig) -> Result<(), DomainError> {
        config.validate()?;

        if config.domain.is_general() {
            self.general = config;
            return Ok(());
        }

        let engine = RuleEngine::new(config.domain, config.rules.clone());
        let entry = RegisteredDomain { config, engine };
        match self
            .entries
            .iter_mut()
            .find(|e| e.config.domain == entry.config.domain)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    pub fn get(&self, domain: Domain) -> Option<&DomainConfig> {
        if domain.is_general() {
            return Some(&self.general);
        }
        self.entry(domain).map(|e| &e.config)
    }

    /// Registered specialised domains, in registration order
    pub fn domains(&self) -> impl Iterator<Item = Domain> + '_ {
        self.entries.iter().map(|e| e.config.domain)
    }

    /// Registered configs followed by the general fallback
    pub fn configs(&self) -> impl Iterator<Item = &DomainConfig> + '_ {
        self.entries
            .iter()
            .map(|e| &e.config)
            .chain(std::iter::once(&self.general))
    }

    pub fn is_registered(&self, domain: Domain) -> bool {
        domain.is_general() || self.entry(domain).is_some()
    }

    /// Replace the quality weights of a registered domain
    pub fn set_quality_weights(
        &mut self,
        domain: Domain,
        weights: QualityWeights,
    ) -> Result<(), DomainError> {
        weights.validate().map_err(|e| e.for_domain(domain))?;

        if domain.is_general() {
            self.general.quality_weights = weights;
            return Ok(());
        }

        match self.entries.iter_mut().find(|e| e.config.domain == domain) {
            Some(entry) => {
                entry.config.quality_weights = weights;
                Ok(())
            }
            None => Err(DomainError::Configuration(format!(
                "domain '{}' is not registered",
                domain
            ))),
        }
    }

    /// Resolve the working domain of a prompt
    pub fn detect_domain(&self, prompt: &str, analysis: Option<&AnalysisResult>) -> Domain {
        self.detect_domain_scored(prompt, analysis).domain
    }

    /// Detection with the per-domain score table
    pub fn detect_domain_scored(
        &self,
        prompt: &str,
        analysis: Option<&AnalysisResult>,
    ) -> DomainDetection {
        let mut scores: Vec<(Domain, u32)> = self
            .entries
            .iter()
            .map(|entry| {
                let matches: usize = entry
                    .config
                    .detection_patterns
                    .iter()
                    .map(|pattern| pattern.find_iter(prompt).count())
                    .sum();
                (entry.config.domain, matches as u32 * PATTERN_MATCH_WEIGHT)
            })
            .collect();

        if let Some(analysis) = analysis {
            for hint in &analysis.domain_hints {
                let Some(domain) = hint_domain(hint) else {
                    continue;
                };
                if let Some((_, score)) = scores.iter_mut().find(|(d, _)| *d == domain) {
                    *score += HINT_BONUS;
                }
            }
        }

        let detection = DomainDetection::from_scores(scores);
        debug!(domain = %detection.domain, scores = ?detection.scores, "domain detected");
        detection
    }

    /// Refine `prompt` with the rule engine of `domain`.
    ///
    /// Falls back to the general engine when `domain` has none.
    pub fn apply_domain_rules(
        &self,
        prompt: &str,
        domain: Domain,
        analysis: Option<&AnalysisResult>,
    ) -> RuleApplicationResult {
        match self.entry(domain) {
            Some(entry) => entry.engine.apply(prompt, analysis),
            None => {
                if !domain.is_general() {
                    debug!(domain = %domain, "no engine registered, using general rules");
                }
                self.general_engine.apply(prompt, analysis)
            }
        }
    }

    /// Build the system prompt for `domain`.
    ///
    /// A non-blank `context` is appended and nothing else is added.
    /// Otherwise the complexity addendum and the first matching term
    /// addendum are appended when they apply.
    pub fn generate_system_prompt(
        &self,
        domain: Domain,
        analysis: Option<&AnalysisResult>,
        context: Option<&str>,
    ) -> String {
        let config = self.get(domain).unwrap_or(&self.general);
        let mut prompt = config.system_prompt_template.trim().to_string();

        if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
            prompt.push_str("\n\nAdditional context: ");
            prompt.push_str(context);
            return prompt;
        }

        let Some(analysis) = analysis else {
            return prompt;
        };

        if analysis.complexity > COMPLEXITY_THRESHOLD {
            prompt.push_str("\n\n");
            prompt.push_str(COMPLEX_PROJECT_ADDENDUM);
        }

        if let Some(addendum) = config
            .term_addenda
            .iter()
            .find(|a| a.matches(&analysis.technical_terms))
        {
            prompt.push_str("\n\n");
            prompt.push_str(&addendum.text);
        }

        prompt
    }

    /// Registered weights, or uniform weights for unknown domains
    pub fn get_quality_weights(&self, domain: Domain) -> QualityWeights {
        self.get(domain)
            .map(|c| c.quality_weights)
            .unwrap_or_else(QualityWeights::uniform)
    }

    fn entry(&self, domain: Domain) -> Option<&RegisteredDomain> {
        self.entries.iter().find(|e| e.config.domain == domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::config::WEIGHT_EPSILON;

    fn registry() -> DomainRegistry {
        DomainRegistry::with_builtin_domains().unwrap()
    }

    fn custom(domain: Domain, patterns: &[&str]) -> DomainConfig {
        DomainConfig::new(domain, "custom")
            .with_system_prompt("custom template")
            .with_detection_patterns(patterns)
            .unwrap()
    }

    #[test]
    fn test_builtin_domains_in_declaration_order() {
        let domains: Vec<_> = registry().domains().collect();
        assert_eq!(domains, Domain::SPECIALIZED.to_vec());
    }

    #[test]
    fn test_every_domain_weights_sum_to_one() {
        let registry = registry();
        for config in registry.configs() {
            let sum = config.quality_weights.sum();
            assert!(
                (sum - 1.0).abs() <= WEIGHT_EPSILON,
                "{} weights sum to {}",
                config.domain,
                sum
            );
        }
    }

    #[test]
    fn test_detects_sql_scenario() {
        assert_eq!(
            registry().detect_domain("hazme una bonita tabla para usuarios", None),
            Domain::Sql
        );
    }

    #[test]
    fn test_detects_each_builtin_domain() {
        let registry = registry();
        let cases = [
            ("Write a SQL query joining the orders table", Domain::Sql),
            ("Create a logo and tagline for my brand", Domain::Branding),
            ("Write a screenplay scene for a short film", Domain::Cine),
            ("Plan the onboarding and pricing for our SaaS", Domain::Saas),
            ("Set up a CI/CD pipeline with Docker and Kubernetes", Domain::Devops),
        ];
        for (prompt, expected) in cases {
            assert_eq!(registry.detect_domain(prompt, None), expected, "{}", prompt);
        }
    }

    #[test]
    fn test_no_matches_detects_general() {
        assert_eq!(
            registry().detect_domain("Tell me a joke about penguins", None),
            Domain::General
        );
    }

    #[test]
    fn test_hints_add_bonus_and_unknown_hints_are_ignored() {
        let registry = registry();
        let analysis = AnalysisResult::new().with_hints(["video", "astrology"]);
        let detection = registry.detect_domain_scored("Tell me a story", Some(&analysis));
        assert_eq!(detection.domain, Domain::Cine);
        assert_eq!(detection.score_of(Domain::Cine), HINT_BONUS);
    }

    #[test]
    fn test_hint_for_unregistered_domain_is_ignored() {
        let registry = DomainRegistry::new().unwrap();
        let analysis = AnalysisResult::new().with_hints(["database"]);
        assert_eq!(
            registry.detect_domain("anything", Some(&analysis)),
            Domain::General
        );
    }

    #[test]
    fn test_single_match_meets_floor() {
        let mut registry = DomainRegistry::new().unwrap();
        registry
            .register(custom(Domain::Saas, &[r"(?i)\bwidget\b"]))
            .unwrap();
        assert_eq!(registry.detect_domain("one widget", None), Domain::Saas);
        assert_eq!(registry.detect_domain("nothing", None), Domain::General);
    }

    #[test]
    fn test_detection_tie_goes_to_first_registered() {
        let mut registry = DomainRegistry::new().unwrap();
        registry
            .register(custom(Domain::Devops, &[r"(?i)\bshared\b"]))
            .unwrap();
        registry
            .register(custom(Domain::Sql, &[r"(?i)\bshared\b"]))
            .unwrap();
        assert_eq!(registry.detect_domain("shared", None), Domain::Devops);
    }

    #[test]
    fn test_reregistering_keeps_position() {
        let mut registry = registry();
        registry
            .register(custom(Domain::Sql, &[r"(?i)\bledger\b"]))
            .unwrap();
        let domains: Vec<_> = registry.domains().collect();
        assert_eq!(domains[0], Domain::Sql);
        assert_eq!(domains.len(), 5);
        assert_eq!(registry.detect_domain("ledger", None), Domain::Sql);
    }

    #[test]
    fn test_register_rejects_bad_weights() {
        let mut registry = DomainRegistry::new().unwrap();
        let config = custom(Domain::Saas, &[])
            .with_weights(QualityWeights::new(0.3, 0.3, 0.3, 0.3));
        assert!(registry.register(config).unwrap_err().is_configuration());
        assert!(!registry.is_registered(Domain::Saas));
    }

    #[test]
    fn test_apply_domain_rules_sql_scenario() {
        let result = registry().apply_domain_rules(
            "hazme una bonita tabla para usuarios",
            Domain::Sql,
            None,
        );
        assert!(result.refined().contains("Generate a database schema for"));
        assert!(
            result
                .refined()
                .contains("well-structured, normalized database table")
        );
        assert!(!result.rules_applied().is_empty());
    }

    #[test]
    fn test_unregistered_domain_falls_back_to_general_engine() {
        let registry = DomainRegistry::new().unwrap();
        let result = registry.apply_domain_rules("hazme una bonita tabla", Domain::Sql, None);
        assert_eq!(result.refined(), "Hazme una bonita tabla.");
    }

    #[test]
    fn test_system_prompt_context_takes_precedence() {
        let registry = registry();
        let analysis = AnalysisResult::new()
            .with_complexity(0.9)
            .with_technical_terms(["AWS"]);
        let prompt =
            registry.generate_system_prompt(Domain::Devops, Some(&analysis), Some("Fintech team"));
        assert!(prompt.ends_with("Additional context: Fintech team"));
        assert!(!prompt.contains(COMPLEX_PROJECT_ADDENDUM));
    }

    #[test]
    fn test_system_prompt_complexity_and_cloud_addenda() {
        let registry = registry();
        let analysis = AnalysisResult::new()
            .with_complexity(0.9)
            .with_technical_terms(["aws"]);
        let prompt = registry.generate_system_prompt(Domain::Devops, Some(&analysis), None);
        assert!(prompt.contains(COMPLEX_PROJECT_ADDENDUM));
        assert!(prompt.contains("cloud provider"));
    }

    #[test]
    fn test_system_prompt_plain_template() {
        let registry = registry();
        let template = registry
            .get(Domain::Sql)
            .unwrap()
            .system_prompt_template
            .trim()
            .to_string();
        let simple = AnalysisResult::new().with_complexity(0.7);
        assert_eq!(
            registry.generate_system_prompt(Domain::Sql, Some(&simple), Some("   ")),
            template
        );
    }

    #[test]
    fn test_quality_weights_fallback_and_override() {
        let mut registry = DomainRegistry::new().unwrap();
        assert_eq!(
            registry.get_quality_weights(Domain::Cine),
            QualityWeights::uniform()
        );

        let weights = QualityWeights::new(0.4, 0.3, 0.2, 0.1);
        registry.set_quality_weights(Domain::General, weights).unwrap();
        assert_eq!(registry.get_quality_weights(Domain::General), weights);
        assert!(
            registry
                .set_quality_weights(Domain::Cine, weights)
                .is_err()
        );
        assert!(
            registry
                .set_quality_weights(Domain::General, QualityWeights::new(1.0, 1.0, 0.0, 0.0))
                .is_err()
        );
    }
}
