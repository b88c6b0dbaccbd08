//! Output format value object

use serde::{Deserialize, Serialize};

/// How refinement results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Refined prompt, provenance, scores and system prompt (default)
    #[default]
    Full,
    /// Only the refined prompt text
    Refined,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "refined" => Ok(OutputFormat::Refined),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "invalid output format '{}', expected one of: full, refined, json",
                other
            )),
        }
    }
}
