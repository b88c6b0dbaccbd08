//! Fallback configuration for prompts outside every specialized domain

use crate::core::domain::Domain;
use crate::registry::config::{DomainConfig, DomainExample, QualityWeights};

const SYSTEM_PROMPT: &str = "You are an expert prompt engineer and assistant. Interpret the \
request precisely, ask for missing details only when they block progress, and answer with a \
clear structure: context, the answer itself, and any next steps.";

/// The general config carries no pattern library; its refinement is done by
/// [`GeneralRuleEngine`](crate::rules::general::GeneralRuleEngine).
pub fn config() -> DomainConfig {
    DomainConfig::new(Domain::General, "General-purpose prompts")
        .with_weights(QualityWeights::uniform())
        .with_system_prompt(SYSTEM_PROMPT)
        .with_example(DomainExample::new(
            "can u help me pls",
            "Can you help me please.",
            "Casual wording expanded, first letter capitalized, terminal punctuation added.",
            0.1,
        ))
}
