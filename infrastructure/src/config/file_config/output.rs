//! `[output]` section

use refinery_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// How results are printed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `full`, `refined` or `json`; `-o` overrides it
    pub format: Option<OutputFormat>,
    /// ANSI colors in console output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
