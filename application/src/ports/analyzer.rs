//! Analyzer port
//!
//! Supplies the NLP signal (complexity, ambiguity, domain hints, technical
//! terms) that detection, system-prompt generation and scoring consume.

use async_trait::async_trait;
use refinery_domain::AnalysisResult;
use thiserror::Error;

/// Errors that can occur while analyzing a prompt
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Analysis failed: {0}")]
    Failed(String),

    #[error("Analyzer unavailable: {0}")]
    Unavailable(String),
}

/// Prompt analyzer
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, prompt: &str) -> Result<AnalysisResult, AnalyzerError>;
}
