//! Infrastructure layer for prompt-refinery
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod analysis;
pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use analysis::{KeywordAnalyzer, StructuralValidator};
pub use config::{
    ConfigLoader, FileConfig, FileDomainConfig, FileLoggingConfig, FileOutputConfig,
    FileRefineConfig, FileStoreConfig,
};
pub use logging::JsonlRefinementLogger;
pub use store::JsonFilePromptStore;
