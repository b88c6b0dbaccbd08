//! Structural checks on refined prompts

use refinery_application::ports::prompt_validator::PromptValidator;
use refinery_domain::core::string::word_count;
use refinery_domain::{Domain, ValidationIssue};
use regex::Regex;

/// Prompts with fewer words than this are flagged in every domain
const MIN_WORDS: usize = 4;

/// [`PromptValidator`] that flags risky SQL, inline secrets, and prompts
/// too short to act on.
#[derive(Debug, Clone)]
pub struct StructuralValidator {
    select_star: Regex,
    unscoped_write: Regex,
    where_clause: Regex,
    drop_table: Regex,
    inline_secret: Regex,
}

impl StructuralValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            select_star: Regex::new(r"(?i)\bselect\s+\*")?,
            unscoped_write: Regex::new(r"(?i)\b(?:update\s+\w+\s+set|delete\s+from)\b")?,
            where_clause: Regex::new(r"(?i)\bwhere\b")?,
            drop_table: Regex::new(r"(?i)\bdrop\s+table\b")?,
            inline_secret: Regex::new(
                r"(?i)\b(?:password|passwd|pwd|api[_-]?key|secret|token)\s*[=:]\s*\S+",
            )?,
        })
    }

    fn check_sql(&self, prompt: &str, issues: &mut Vec<ValidationIssue>) {
        if self.select_star.is_match(prompt) {
            issues.push(ValidationIssue::warning(
                "select_star",
                "SELECT * returns every column; name the columns you need",
            ));
        }
        if self.unscoped_write.is_match(prompt) && !self.where_clause.is_match(prompt) {
            issues.push(ValidationIssue::error(
                "unscoped_write",
                "UPDATE/DELETE without a WHERE clause touches every row",
            ));
        }
        if self.drop_table.is_match(prompt) {
            issues.push(ValidationIssue::warning(
                "drop_table",
                "DROP TABLE is irreversible; ask for a backup or a reversible migration",
            ));
        }
    }

    fn check_devops(&self, prompt: &str, issues: &mut Vec<ValidationIssue>) {
        if self.inline_secret.is_match(prompt) {
            issues.push(ValidationIssue::error(
                "inline_secret",
                "credential written inline; reference a secret manager or environment variable instead",
            ));
        }
    }
}

impl PromptValidator for StructuralValidator {
    fn validate(&self, refined: &str, domain: Domain) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        match domain {
            Domain::Sql => self.check_sql(refined, &mut issues),
            Domain::Devops => self.check_devops(refined, &mut issues),
            _ => {}
        }

        let words = word_count(refined);
        if words < MIN_WORDS {
            issues.push(ValidationIssue::warning(
                "too_short",
                format!("only {} word(s); add the goal, context, and expected output", words),
            ));
        }

        issues
    }
}
