//! Application layer for prompt-refinery
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RefineOptions;
pub use ports::{
    analyzer::{Analyzer, AnalyzerError},
    prompt_store::{
        PromptMetadata, PromptStore, ScoreSnapshot, SearchCriteria, StoreError, StoredPrompt,
    },
    prompt_validator::PromptValidator,
    refinement_logger::{NoRefinementLogger, RefinementEvent, RefinementLogger},
};
pub use use_cases::compare_prompts::{
    ComparePromptsError, ComparePromptsInput, ComparePromptsUseCase,
};
pub use use_cases::prompt_history::{HistoryError, PromptHistoryUseCase};
pub use use_cases::refine_prompt::{RefinePromptError, RefinePromptInput, RefinePromptUseCase};
