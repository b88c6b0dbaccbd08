//! Use cases (application services)

pub mod compare_prompts;
pub mod prompt_history;
pub mod refine_prompt;
