//! Refinement configuration from TOML (`[refine]` section)

use refinery_application::RefineOptions;
use serde::{Deserialize, Serialize};

/// Raw refinement configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRefineConfig {
    /// Run the keyword analyzer before detection and scoring
    pub analyze: bool,
    /// Run the structural validator on refined prompts
    pub validate: bool,
    /// Persist refinements without `--save`
    pub save: bool,
}

impl Default for FileRefineConfig {
    fn default() -> Self {
        let options = RefineOptions::default();
        Self {
            analyze: options.analyze,
            validate: options.validate,
            save: options.save,
        }
    }
}

impl FileRefineConfig {
    pub fn to_options(&self) -> RefineOptions {
        RefineOptions {
            analyze: self.analyze,
            validate: self.validate,
            save: self.save,
        }
    }
}
