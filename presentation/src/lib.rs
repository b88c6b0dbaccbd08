//! Presentation layer for prompt-refinery
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{
    Cli, Command, CompareArgs, HistoryArgs, OutputFormat, RefineArgs, resolve_domain,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
