//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod domains;
mod logging;
mod output;
mod refine;
mod store;

pub use domains::FileDomainConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use refine::FileRefineConfig;
pub use store::FileStoreConfig;

use refinery_domain::{ConfigIssue, ConfigIssueCode, Domain, QualityWeights};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Refinement pipeline toggles
    pub refine: FileRefineConfig,
    /// Prompt store settings
    pub store: FileStoreConfig,
    /// Structured event log settings
    pub logging: FileLoggingConfig,
    /// Per-domain overrides keyed by domain name
    pub domains: BTreeMap<String, FileDomainConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// It checks:
    /// 1. `[domains.<name>]` keys that name no known domain
    /// 2. Weight overrides out of range or not summing to 1.0
    /// 3. `[refine] save = true` with no usable store path
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (name, domain_config) in &self.domains {
            let Ok(domain) = name.parse::<Domain>() else {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownDomain,
                    format!("[domains.{}]: unknown domain, section ignored", name),
                ));
                continue;
            };
            let Some(weights) = domain_config.weights else {
                continue;
            };
            if let Err(e) = weights.validate() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidWeights,
                    format!("[domains.{}.weights]: {}", domain, e),
                ));
            }
        }

        if self.refine.save && self.store.resolved_path().is_none() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingStorePath,
                "[refine] save = true but no store path is available; refinements will not be saved",
            ));
        }

        issues
    }

    /// Weight overrides for known domains, in key order.
    ///
    /// Unknown domain keys are skipped; [`Self::validate`] reports them.
    pub fn weight_overrides(&self) -> Vec<(Domain, QualityWeights)> {
        self.domains
            .iter()
            .filter_map(|(name, config)| {
                let domain = name.parse::<Domain>().ok()?;
                config.weights.map(|w| (domain, w))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refinery_domain::{OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "refined"
color = false

[refine]
analyze = false
save = true

[store]
path = "/tmp/refinery/prompts.json"

[logging]
events_file = "events.jsonl"

[domains.sql.weights]
clarity = 0.1
specificity = 0.5
structure = 0.2
completeness = 0.2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Refined));
        assert!(!config.output.color);
        assert!(!config.refine.analyze);
        assert!(config.refine.validate);
        assert!(config.refine.save);
        assert_eq!(config.logging.events_file.as_deref(), Some("events.jsonl"));
        assert_eq!(
            config.weight_overrides(),
            vec![(Domain::Sql, QualityWeights::new(0.1, 0.5, 0.2, 0.2))]
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert!(config.refine.analyze);
        assert!(config.refine.validate);
        assert!(!config.refine.save);
        assert!(config.logging.events_file.is_none());
        assert!(config.domains.is_empty());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_unknown_domain_is_warning() {
        let toml_str = r#"
[domains.poetry.weights]
clarity = 0.25
specificity = 0.25
structure = 0.25
completeness = 0.25
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::UnknownDomain);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(config.weight_overrides().is_empty());
    }

    #[test]
    fn test_bad_weight_sum_is_error() {
        let toml_str = r#"
[domains.devops.weights]
clarity = 0.5
specificity = 0.5
structure = 0.5
completeness = 0.5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::InvalidWeights);
        assert!(ConfigIssue::has_errors(&issues));
        assert!(issues[0].message.starts_with("[domains.devops.weights]"));
    }

    #[test]
    fn test_save_without_store_path_is_warning() {
        let mut config = FileConfig::default();
        config.refine.save = true;
        config.store.path = Some(String::new());
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::MissingStorePath);
        assert!(!ConfigIssue::has_errors(&issues));
    }
}
