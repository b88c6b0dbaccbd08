//! Local prompt analysis and validation adapters.
//!
//! - [`KeywordAnalyzer`] implements the [`Analyzer`](refinery_application::Analyzer) port
//! - [`StructuralValidator`] implements the
//!   [`PromptValidator`](refinery_application::PromptValidator) port

mod keyword_analyzer;
mod structural_validator;

pub use keyword_analyzer::KeywordAnalyzer;
pub use structural_validator::StructuralValidator;
