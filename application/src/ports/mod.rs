//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod analyzer;
pub mod prompt_store;
pub mod prompt_validator;
pub mod refinement_logger;
