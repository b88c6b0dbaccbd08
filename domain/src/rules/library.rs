//! Pattern library: the ordered rule data of one domain

use super::pattern::{EnhancementRule, PatternRule, RuleCategory};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Ordered rule sets for one domain. Pure data.
///
/// Substitution rules are partitioned by category and stably sorted by
/// descending priority, so rules with equal priority keep declaration order.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    vague: Vec<PatternRule>,
    structure: Vec<PatternRule>,
    technical: Vec<PatternRule>,
    contextual: Vec<EnhancementRule>,
    best_practices: Vec<EnhancementRule>,
}

impl PatternLibrary {
    /// An empty library (matches nothing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a library from declared rules.
    ///
    /// Fails on duplicate ids within a category.
    pub fn new(
        substitutions: Vec<PatternRule>,
        enhancements: Vec<EnhancementRule>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for (category, id) in substitutions
            .iter()
            .map(|r| (r.category, r.id.as_str()))
            .chain(enhancements.iter().map(|r| (r.category, r.id.as_str())))
        {
            if !seen.insert((category, id)) {
                return Err(DomainError::Configuration(format!(
                    "duplicate {} rule id '{}'",
                    category, id
                )));
            }
        }

        let mut library = Self::default();
        for rule in substitutions {
            match rule.category {
                RuleCategory::VagueTerms => library.vague.push(rule),
                RuleCategory::Structure => library.structure.push(rule),
                _ => library.technical.push(rule),
            }
        }
        for rule in enhancements {
            match rule.category {
                RuleCategory::Contextual => library.contextual.push(rule),
                _ => library.best_practices.push(rule),
            }
        }

        // Vec::sort_by_key is stable
        for rules in [
            &mut library.vague,
            &mut library.structure,
            &mut library.technical,
        ] {
            rules.sort_by_key(|r| std::cmp::Reverse(r.priority));
        }

        Ok(library)
    }

    pub fn vague(&self) -> &[PatternRule] {
        &self.vague
    }

    pub fn structure(&self) -> &[PatternRule] {
        &self.structure
    }

    pub fn technical(&self) -> &[PatternRule] {
        &self.technical
    }

    pub fn contextual(&self) -> &[EnhancementRule] {
        &self.contextual
    }

    pub fn best_practices(&self) -> &[EnhancementRule] {
        &self.best_practices
    }

    /// Total number of rules across all categories
    pub fn len(&self) -> usize {
        self.vague.len()
            + self.structure.len()
            + self.technical.len()
            + self.contextual.len()
            + self.best_practices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
