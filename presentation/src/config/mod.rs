//! Presentation-level configuration
//!
//! Resolved output settings after merging CLI flags over the config file.

use refinery_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Print only the result
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            quiet: false,
        }
    }
}

impl OutputConfig {
    /// CLI format wins over the file format, which wins over the default.
    /// JSON output is never colored.
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
        quiet: bool,
    ) -> Self {
        let format = cli_format.or(file_format).unwrap_or_default();
        Self {
            format,
            color: color && format != OutputFormat::Json,
            quiet,
        }
    }

    /// Turn terminal colors off process-wide when disabled
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(OutputFormat::Refined),
            Some(OutputFormat::Json),
            true,
            false,
        );
        assert_eq!(config.format, OutputFormat::Refined);
        assert!(config.color);
    }

    #[test]
    fn test_file_format_then_default() {
        let from_file = OutputConfig::resolve(None, Some(OutputFormat::Json), true, false);
        assert_eq!(from_file.format, OutputFormat::Json);
        assert!(!from_file.color);

        assert_eq!(
            OutputConfig::resolve(None, None, true, true),
            OutputConfig {
                format: OutputFormat::Full,
                color: true,
                quiet: true,
            }
        );
    }
}
