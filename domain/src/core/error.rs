//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Degraded matches (no domain above the detection floor, unknown domain
/// requested) are never errors: they resolve to [`Domain::General`].
///
/// [`Domain::General`]: crate::Domain::General
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed pattern library or invalid quality weights.
    /// Raised while building the registry, never at request time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Check if this error is fatal at startup
    pub fn is_configuration(&self) -> bool {
        matches!(self, DomainError::Configuration(_))
    }

    /// Prefix the message with the domain it concerns
    pub fn for_domain(self, domain: impl std::fmt::Display) -> Self {
        match self {
            DomainError::Configuration(msg) => {
                DomainError::Configuration(format!("domain '{}': {}", domain, msg))
            }
            DomainError::InvalidInput(msg) => {
                DomainError::InvalidInput(format!("domain '{}': {}", domain, msg))
            }
        }
    }
}

/// Failure raised by a dynamic replacement function.
///
/// A rule that fails is skipped; the rest of the pipeline keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RuleError(pub String);

impl RuleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = DomainError::InvalidInput("at least 2 variants required".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid input: at least 2 variants required"
        );
    }

    #[test]
    fn test_is_configuration_check() {
        assert!(DomainError::Configuration("bad regex".to_string()).is_configuration());
        assert!(!DomainError::InvalidInput("empty".to_string()).is_configuration());
    }

    #[test]
    fn test_rule_error_display() {
        assert_eq!(RuleError::new("unknown entity").to_string(), "unknown entity");
    }

    #[test]
    fn test_for_domain_prefixes_message() {
        let error =
            DomainError::Configuration("weights must sum to 1.0".to_string()).for_domain("sql");
        assert_eq!(
            error,
            DomainError::Configuration("domain 'sql': weights must sum to 1.0".to_string())
        );
    }
}
