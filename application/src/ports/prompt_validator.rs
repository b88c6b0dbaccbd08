//! Prompt validator port

use refinery_domain::{Domain, ValidationIssue};

/// Structural checks run on a refined prompt.
///
/// Synchronous and infallible: a validator reports issues, it never
/// rejects the refinement.
pub trait PromptValidator: Send + Sync {
    fn validate(&self, refined: &str, domain: Domain) -> Vec<ValidationIssue>;
}
