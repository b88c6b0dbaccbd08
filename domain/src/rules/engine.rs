//! Rule engine: applies a pattern library to a prompt

use super::library::PatternLibrary;
use super::pattern::{EnhancementRule, PatternRule};
use crate::core::analysis::AnalysisResult;
use crate::core::domain::Domain;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of running a rule engine over a prompt.
///
/// `rules_applied` and `improvements` are parallel: entry `i` of each
/// describes the same fired rule. Created fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleApplicationResult {
    refined: String,
    rules_applied: Vec<String>,
    improvements: Vec<String>,
}

impl RuleApplicationResult {
    pub(crate) fn start(prompt: &str) -> Self {
        Self {
            refined: prompt.to_string(),
            rules_applied: Vec::new(),
            improvements: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, rule: String, improvement: String) {
        self.rules_applied.push(rule);
        self.improvements.push(improvement);
    }

    pub(crate) fn text(&self) -> &str {
        &self.refined
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.refined = text;
    }

    pub(crate) fn finish(mut self) -> Self {
        self.refined = self.refined.trim().to_string();
        self
    }

    pub fn refined(&self) -> &str {
        &self.refined
    }

    pub fn rules_applied(&self) -> &[String] {
        &self.rules_applied
    }

    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    /// True when no rule fired
    pub fn is_unchanged(&self) -> bool {
        self.rules_applied.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<String>, Vec<String>) {
        (self.refined, self.rules_applied, self.improvements)
    }
}

/// Rule engine for one domain.
///
/// Stages run in fixed order: vague terms, structure, technical
/// standardization, contextual enhancement, best practices.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    domain: Domain,
    library: PatternLibrary,
}

impl RuleEngine {
    pub fn new(domain: Domain, library: PatternLibrary) -> Self {
        Self { domain, library }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Refine `prompt`. Never fails: a rule whose replacement errors is
    /// skipped and reported through `tracing`.
    ///
    /// `analysis` is accepted for parity with the general engine; the
    /// domain libraries are purely textual.
    pub fn apply(&self, prompt: &str, _analysis: Option<&AnalysisResult>) -> RuleApplicationResult {
        let mut result = RuleApplicationResult::start(prompt);

        self.substitute(&mut result, self.library.vague());
        self.substitute(&mut result, self.library.structure());
        self.substitute(&mut result, self.library.technical());
        self.enhance(&mut result, self.library.contextual());
        self.enhance(&mut result, self.library.best_practices());

        result.finish()
    }

    fn substitute(&self, result: &mut RuleApplicationResult, rules: &[PatternRule]) {
        for rule in rules {
            match rule.apply(result.text()) {
                Ok(Some(text)) => {
                    debug!(domain = %self.domain, rule = %rule.id, "substitution rule applied");
                    result.set_text(text);
                    result.record(rule.provenance(), rule.improvement());
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        domain = %self.domain,
                        rule = %rule.id,
                        error = %e,
                        "Skipping rule: replacement failed"
                    );
                }
            }
        }
    }

    fn enhance(&self, result: &mut RuleApplicationResult, rules: &[EnhancementRule]) {
        for rule in rules {
            if rule.should_append(result.text()) {
                debug!(domain = %self.domain, rule = %rule.id, "enhancement appended");
                let text = format!("{}\n\n{}", result.text().trim_end(), rule.append);
                result.set_text(text);
                result.record(rule.provenance(), rule.improvement());
            }
        }
    }
}
