//! Domain tag value object

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Working domain of a prompt (Value Object)
///
/// Every prompt is ultimately associated with exactly one domain for
/// scoring purposes. `General` is the fallback when detection is not
/// confident enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Sql,
    Branding,
    Cine,
    Saas,
    Devops,
    General,
}

impl Domain {
    /// The specialised domains, in built-in registration order.
    pub const SPECIALIZED: [Domain; 5] = [
        Domain::Sql,
        Domain::Branding,
        Domain::Cine,
        Domain::Saas,
        Domain::Devops,
    ];

    /// Get the string identifier for this domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Sql => "sql",
            Domain::Branding => "branding",
            Domain::Cine => "cine",
            Domain::Saas => "saas",
            Domain::Devops => "devops",
            Domain::General => "general",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Sql => "SQL & Databases",
            Domain::Branding => "Branding & Marketing",
            Domain::Cine => "Film & Video Production",
            Domain::Saas => "SaaS Products",
            Domain::Devops => "DevOps & Infrastructure",
            Domain::General => "General",
        }
    }

    /// All domains including `General`
    pub fn all() -> [Domain; 6] {
        [
            Domain::Sql,
            Domain::Branding,
            Domain::Cine,
            Domain::Saas,
            Domain::Devops,
            Domain::General,
        ]
    }

    /// Parse a domain name, degrading unknown names to `General`.
    ///
    /// An unknown request is never an error; the degradation is logged.
    pub fn parse_or_general(s: &str) -> Domain {
        s.parse().unwrap_or_else(|_| {
            warn!("Unknown domain '{}', using general", s.trim());
            Domain::General
        })
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Domain::General)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sql" | "database" => Ok(Domain::Sql),
            "branding" | "brand" => Ok(Domain::Branding),
            "cine" | "cinema" | "film" => Ok(Domain::Cine),
            "saas" => Ok(Domain::Saas),
            "devops" => Ok(Domain::Devops),
            "general" => Ok(Domain::General),
            other => Err(format!(
                "Unknown domain: {}. Valid: sql, branding, cine, saas, devops, general",
                other
            )),
        }
    }
}
