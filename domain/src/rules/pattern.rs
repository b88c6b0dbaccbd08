//! Pattern rule primitives
//!
//! A [`PatternRule`] rewrites text in place (regex global substitution).
//! An [`EnhancementRule`] appends a fixed paragraph of guidance when its
//! trigger matches and its `unless` condition does not.

use crate::core::error::{DomainError, RuleError};
use regex::{Captures, Regex};
use std::sync::Arc;

/// Pipeline stage a rule belongs to, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleCategory {
    /// Vague wording replaced by precise wording
    VagueTerms,
    /// Command-like openers rewritten into professional framing
    Structure,
    /// Terminology standardization
    Technical,
    /// Trigger-based contextual guidance
    Contextual,
    /// Domain best practices, appended last
    BestPractice,
}

impl RuleCategory {
    /// Prefix used for provenance entries (`<prefix>_<description>`)
    pub fn prefix(&self) -> &'static str {
        match self {
            RuleCategory::VagueTerms => "vague",
            RuleCategory::Structure => "structure",
            RuleCategory::Technical => "technical",
            RuleCategory::Contextual => "enhancement",
            RuleCategory::BestPractice => "best_practice",
        }
    }

    /// Whether rules of this category substitute text (as opposed to appending)
    pub fn is_substitution(&self) -> bool {
        matches!(
            self,
            RuleCategory::VagueTerms | RuleCategory::Structure | RuleCategory::Technical
        )
    }

    fn improvement_note(&self, note: &str) -> String {
        match self {
            RuleCategory::VagueTerms => format!("Replaced vague wording: {}", note),
            RuleCategory::Structure => format!("Reframed the request: {}", note),
            RuleCategory::Technical => format!("Standardized terminology: {}", note),
            RuleCategory::Contextual => format!("Added context: {}", note),
            RuleCategory::BestPractice => format!("Added best practice: {}", note),
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Function form of a replacement, called once per match.
pub type ReplacementFn = dyn Fn(&Captures<'_>) -> Result<String, RuleError> + Send + Sync;

/// What a match is replaced with.
#[derive(Clone)]
pub enum Replacement {
    /// Literal template; `$1` / `${name}` expand capture groups
    Static(String),
    /// Computed from the match; an `Err` skips the whole rule
    Dynamic(Arc<ReplacementFn>),
}

impl Replacement {
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Captures<'_>) -> Result<String, RuleError> + Send + Sync + 'static,
    {
        Replacement::Dynamic(Arc::new(f))
    }
}

impl std::fmt::Debug for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Replacement::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Replacement::Dynamic(_) => f.write_str("Dynamic(<fn>)"),
        }
    }
}

/// Rule ids double as provenance slugs: lowercase ASCII, digits and `_`.
fn slug(id: String) -> Result<String, DomainError> {
    let valid = !id.is_empty()
        && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(DomainError::Configuration(format!(
            "rule '{}': id must be a lowercase slug",
            id
        )))
    }
}

pub(crate) fn compile(id: &str, pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern).map_err(|e| {
        DomainError::Configuration(format!("rule '{}': invalid pattern: {}", id, e))
    })
}

/// A match/replace rule applied with global substitution.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub id: String,
    pub matcher: Regex,
    pub replacement: Replacement,
    /// Higher runs first within its category; equal priorities keep declaration order
    pub priority: i32,
    pub category: RuleCategory,
    /// Short slug recorded in provenance as `<prefix>_<description>`; same as `id`
    pub description: String,
    /// Human-readable improvement text
    pub note: String,
}

impl PatternRule {
    /// Create a rule with a literal replacement template
    pub fn substitute(
        category: RuleCategory,
        id: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            category,
            id,
            pattern,
            Replacement::Static(replacement.into()),
            note,
        )
    }

    pub fn new(
        category: RuleCategory,
        id: impl Into<String>,
        pattern: &str,
        replacement: Replacement,
        note: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = slug(id.into())?;
        if !category.is_substitution() {
            return Err(DomainError::Configuration(format!(
                "rule '{}': category '{}' does not substitute text",
                id, category
            )));
        }
        let matcher = compile(&id, pattern)?;
        Ok(Self {
            description: id.clone(),
            id,
            matcher,
            replacement,
            priority: 0,
            category,
            note: note.into(),
        })
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Provenance entry recorded when this rule fires
    pub fn provenance(&self) -> String {
        format!("{}_{}", self.category.prefix(), self.description)
    }

    pub fn improvement(&self) -> String {
        self.category.improvement_note(&self.note)
    }

    /// Apply the rule to `text`.
    ///
    /// Returns `Ok(None)` when nothing matches.
    pub fn apply(&self, text: &str) -> Result<Option<String>, RuleError> {
        if !self.matcher.is_match(text) {
            return Ok(None);
        }

        match &self.replacement {
            Replacement::Static(template) => Ok(Some(
                self.matcher
                    .replace_all(text, template.as_str())
                    .into_owned(),
            )),
            Replacement::Dynamic(f) => {
                let mut out = String::with_capacity(text.len());
                let mut last = 0;
                for caps in self.matcher.captures_iter(text) {
                    let Some(whole) = caps.get(0) else {
                        continue;
                    };
                    out.push_str(&text[last..whole.start()]);
                    out.push_str(&f(&caps)?);
                    last = whole.end();
                }
                out.push_str(&text[last..]);
                Ok(Some(out))
            }
        }
    }
}

/// A trigger/append rule. Appends at most once per invocation.
#[derive(Debug, Clone)]
pub struct EnhancementRule {
    pub id: String,
    /// Tested against the current (already refined) text
    pub trigger: Regex,
    /// "Already present" condition: when it matches, nothing is appended
    pub unless: Option<Regex>,
    pub append: String,
    pub category: RuleCategory,
    /// Short slug recorded in provenance; same as `id`
    pub description: String,
    pub note: String,
}

impl EnhancementRule {
    pub fn new(
        category: RuleCategory,
        id: impl Into<String>,
        trigger: &str,
        unless: Option<&str>,
        append: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = slug(id.into())?;
        if category.is_substitution() {
            return Err(DomainError::Configuration(format!(
                "rule '{}': category '{}' does not append text",
                id, category
            )));
        }
        let trigger = compile(&id, trigger)?;
        let unless = unless.map(|p| compile(&id, p)).transpose()?;
        Ok(Self {
            description: id.clone(),
            id,
            trigger,
            unless,
            append: append.into(),
            category,
            note: note.into(),
        })
    }

    /// Create a contextual enhancement rule
    pub fn contextual(
        id: impl Into<String>,
        trigger: &str,
        unless: &str,
        append: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            RuleCategory::Contextual,
            id,
            trigger,
            Some(unless),
            append,
            note,
        )
    }

    /// Create a best-practice rule
    pub fn best_practice(
        id: impl Into<String>,
        trigger: &str,
        unless: &str,
        append: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(
            RuleCategory::BestPractice,
            id,
            trigger,
            Some(unless),
            append,
            note,
        )
    }

    pub fn should_append(&self, text: &str) -> bool {
        self.trigger.is_match(text) && !self.unless.as_ref().is_some_and(|u| u.is_match(text))
    }

    pub fn provenance(&self) -> String {
        format!("{}_{}", self.category.prefix(), self.description)
    }

    pub fn improvement(&self) -> String {
        self.category.improvement_note(&self.note)
    }
}
