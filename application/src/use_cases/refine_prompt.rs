//! Refine Prompt use case
//!
//! Orchestrates one refinement: analysis, domain resolution, rule
//! application, system-prompt generation, scoring, validation and
//! optional persistence.

use crate::ports::analyzer::{Analyzer, AnalyzerError};
use crate::ports::prompt_store::{PromptMetadata, PromptStore, StoreError};
use crate::ports::prompt_validator::PromptValidator;
use crate::ports::refinement_logger::{NoRefinementLogger, RefinementEvent, RefinementLogger};
use refinery_domain::{
    AnalysisResult, Domain, DomainError, DomainRegistry, DomainSource, PromptEvaluator,
    QualityScore, QualityScorer, RefinementReport,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during refinement
#[derive(Error, Debug)]
pub enum RefinePromptError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Input for the RefinePrompt use case
#[derive(Debug, Clone, PartialEq)]
pub struct RefinePromptInput {
    pub prompt: String,
    /// Explicit domain; detected when `None`
    pub domain: Option<Domain>,
    /// Extra context appended to the system prompt
    pub context: Option<String>,
    /// Persist the refinement (requires a configured store)
    pub save: bool,
}

impl RefinePromptInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            domain: None,
            context: None,
            save: false,
        }
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }
}

/// Use case for refining a single prompt
pub struct RefinePromptUseCase {
    registry: Arc<DomainRegistry>,
    evaluator: Arc<dyn PromptEvaluator>,
    scorer: QualityScorer,
    analyzer: Option<Arc<dyn Analyzer>>,
    validator: Option<Arc<dyn PromptValidator>>,
    store: Option<Arc<dyn PromptStore>>,
    logger: Arc<dyn RefinementLogger>,
}

impl RefinePromptUseCase {
    pub fn new(registry: Arc<DomainRegistry>, evaluator: Arc<dyn PromptEvaluator>) -> Self {
        Self {
            scorer: QualityScorer::new(registry.clone()),
            registry,
            evaluator,
            analyzer: None,
            validator: None,
            store: None,
            logger: Arc::new(NoRefinementLogger),
        }
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn PromptValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn PromptStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn RefinementLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub async fn execute(
        &self,
        input: RefinePromptInput,
    ) -> Result<RefinementReport, RefinePromptError> {
        let prompt = input.prompt.trim();
        if prompt.is_empty() {
            return Err(DomainError::InvalidInput("prompt must not be empty".to_string()).into());
        }

        info!("Refining prompt ({} chars)", prompt.len());

        let analysis = self.analyze(prompt).await?;

        let (domain, domain_source) = match input.domain {
            Some(domain) => (domain, DomainSource::Explicit),
            None => (
                self.registry.detect_domain(prompt, analysis.as_ref()),
                DomainSource::Detected,
            ),
        };
        debug!(domain = %domain, source = %domain_source, "domain resolved");

        let (refined, rules_applied, improvements) = self
            .registry
            .apply_domain_rules(prompt, domain, analysis.as_ref())
            .into_parts();

        let system_prompt = self.registry.generate_system_prompt(
            domain,
            analysis.as_ref(),
            input.context.as_deref(),
        );

        let original_score = self.score(prompt, domain, analysis.as_ref());
        let refined_analysis = if refined == prompt {
            analysis.clone()
        } else {
            self.analyze(&refined).await?
        };
        let refined_score = self.score(&refined, domain, refined_analysis.as_ref());

        let validation_issues = match &self.validator {
            Some(validator) => validator.validate(&refined, domain),
            None => Vec::new(),
        };

        let stored_id = if input.save {
            match &self.store {
                Some(store) => {
                    let metadata = PromptMetadata {
                        original: prompt.to_string(),
                        domain,
                        rules_applied: rules_applied.clone(),
                    };
                    let stored = store.save(&refined, metadata, &refined_score).await?;
                    Some(stored.id)
                }
                None => {
                    warn!("Save requested but no prompt store is configured");
                    None
                }
            }
        } else {
            None
        };

        let report = RefinementReport {
            original: prompt.to_string(),
            refined,
            domain,
            domain_source,
            rules_applied,
            improvements,
            system_prompt,
            original_score,
            refined_score,
            validation_issues,
            stored_id,
        };

        self.logger.log(RefinementEvent::new(
            "prompt_refined",
            json!({
                "domain": report.domain,
                "domain_source": report.domain_source,
                "original": report.original,
                "refined": report.refined,
                "rules_applied": report.rules_applied,
                "original_overall": report.original_score.overall(),
                "refined_overall": report.refined_score.overall(),
                "validation_issues": report.validation_issues.len(),
                "stored_id": report.stored_id,
            }),
        ));

        info!(
            "Refinement complete: {} rules applied, overall {:.2} -> {:.2}",
            report.rules_applied.len(),
            report.original_score.overall(),
            report.refined_score.overall()
        );

        Ok(report)
    }

    async fn analyze(&self, text: &str) -> Result<Option<AnalysisResult>, AnalyzerError> {
        match &self.analyzer {
            Some(analyzer) => Ok(Some(analyzer.analyze(text).await?)),
            None => Ok(None),
        }
    }

    fn score(&self, text: &str, domain: Domain, analysis: Option<&AnalysisResult>) -> QualityScore {
        let sub = self.evaluator.evaluate(text, domain, analysis);
        self.scorer.score(sub, domain)
    }
}
