//! Per-domain overrides from TOML (`[domains.<name>]` sections)

use refinery_domain::QualityWeights;
use serde::{Deserialize, Serialize};

/// Raw per-domain configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDomainConfig {
    /// Replaces the built-in quality weights when set
    pub weights: Option<QualityWeights>,
}
