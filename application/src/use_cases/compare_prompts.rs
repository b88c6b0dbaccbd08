//! Compare Prompts use case
//!
//! Scores two or more prompt variants against each other and records the
//! outcome.

use crate::ports::refinement_logger::{NoRefinementLogger, RefinementEvent, RefinementLogger};
use refinery_domain::{
    ComparisonResult, DomainError, DomainRegistry, PromptComparator, PromptEvaluator,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during comparison
#[derive(Error, Debug)]
pub enum ComparePromptsError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the ComparePrompts use case
#[derive(Debug, Clone, PartialEq)]
pub struct ComparePromptsInput {
    pub variants: Vec<String>,
    /// Substituted for `{{input}}` / `{input}` in every variant
    pub test_input: Option<String>,
}

impl ComparePromptsInput {
    pub fn new<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variants: variants.into_iter().map(Into::into).collect(),
            test_input: None,
        }
    }

    pub fn with_test_input(mut self, test_input: impl Into<String>) -> Self {
        self.test_input = Some(test_input.into());
        self
    }
}

/// Use case for comparing prompt variants
pub struct ComparePromptsUseCase {
    comparator: PromptComparator,
    logger: Arc<dyn RefinementLogger>,
}

impl ComparePromptsUseCase {
    pub fn new(registry: Arc<DomainRegistry>, evaluator: Arc<dyn PromptEvaluator>) -> Self {
        Self {
            comparator: PromptComparator::new(registry, evaluator),
            logger: Arc::new(NoRefinementLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RefinementLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn execute(
        &self,
        input: ComparePromptsInput,
    ) -> Result<ComparisonResult, ComparePromptsError> {
        info!("Comparing {} prompt variants", input.variants.len());

        let result = self
            .comparator
            .compare(&input.variants, input.test_input.as_deref())?;

        self.logger.log(RefinementEvent::new(
            "prompts_compared",
            json!({
                "variants": input.variants,
                "test_input": input.test_input,
                "winner": result.winner,
                "summary": result.summary,
            }),
        ));

        info!("{}", result.summary);
        Ok(result)
    }
}
