//! Domain layer for prompt-refinery
//!
//! This crate contains the core refinement logic: domain tags, rule
//! libraries and engines, the domain registry and detector, quality
//! scoring, and variant comparison. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Domains
//!
//! Every prompt is worked on in exactly one [`Domain`]. Five specialized
//! domains ship built in (SQL, branding, film, SaaS, DevOps); anything
//! detection is not confident about falls back to `general`.
//!
//! ## Rule pipeline
//!
//! A domain's [`PatternLibrary`] runs in fixed stages: vague-term
//! substitution, structural reframing, terminology standardization,
//! contextual enhancement, and best-practice guidance.
//!
//! ## Registry
//!
//! [`DomainRegistry`] is built once at startup and shared behind an `Arc`.
//! There is no global instance.

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod core;
pub mod quality;
pub mod refinement;
pub mod registry;
pub mod rules;

// Re-export commonly used types
pub use comparison::{
    ComparisonResult, MetricComparison, MetricDirection, MetricValue, PromptComparator,
    VariantResult,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    analysis::AnalysisResult,
    domain::Domain,
    error::{DomainError, RuleError},
};
pub use quality::{HeuristicEvaluator, PromptEvaluator, QualityScore, QualityScorer, SubScores};
pub use refinement::{DomainSource, RefinementReport, ValidationIssue};
pub use registry::{
    DomainRegistry,
    config::{DomainConfig, DomainExample, QualityWeights, TermAddendum},
    detection::DomainDetection,
};
pub use rules::{
    engine::{RuleApplicationResult, RuleEngine},
    library::PatternLibrary,
    pattern::{EnhancementRule, PatternRule, Replacement, RuleCategory},
};
