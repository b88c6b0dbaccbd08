//! Prompt store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw store configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// JSON file holding saved prompts. `~/` is expanded.
    pub path: Option<String>,
}

impl FileStoreConfig {
    /// Configured path, or `<data dir>/prompt-refinery/prompts.json`.
    ///
    /// `None` when the path is blank or no data directory exists.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        match self.path.as_deref().map(str::trim) {
            Some("") => None,
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join("prompt-refinery").join("prompts.json")),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
