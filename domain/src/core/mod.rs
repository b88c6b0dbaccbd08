//! Core domain concepts shared across all subdomains.
//!
//! - [`domain::Domain`]: the working domain tag of a prompt
//! - [`analysis::AnalysisResult`]: NLP signal supplied by an external analyzer
//! - [`error::DomainError`]: domain-level errors

pub mod analysis;
pub mod domain;
pub mod error;
pub mod string;
