//! Configuration file loading for prompt-refinery
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./refinery.toml` or `./.refinery.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/prompt-refinery/config.toml`
//! 4. `REFINERY_*` environment variables (`__` separates nested keys)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDomainConfig, FileLoggingConfig, FileOutputConfig, FileRefineConfig,
    FileStoreConfig,
};
pub use loader::ConfigLoader;
