//! Domain registry and detection

pub mod config;
pub mod detection;
mod domain_registry;

pub use domain_registry::{COMPLEXITY_THRESHOLD, DomainRegistry};
