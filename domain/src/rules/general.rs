//! General fallback engine
//!
//! Used for `general` prompts and for any domain without a registered
//! engine. Performs casual-term replacement, leading capitalization and
//! terminal punctuation only; no contextual enhancements.

use super::engine::RuleApplicationResult;
use super::pattern::compile;
use crate::core::analysis::AnalysisResult;
use crate::core::error::DomainError;
use crate::core::string::capitalize_first;
use regex::Regex;

/// Casual term, its replacement, and the rule id.
const CASUAL_TERMS: &[(&str, &str, &str)] = &[
    ("pls", "please", "pls"),
    ("plz", "please", "plz"),
    ("thx", "thanks", "thx"),
    ("u", "you", "u"),
    ("ur", "your", "ur"),
    ("gonna", "going to", "gonna"),
    ("wanna", "want to", "wanna"),
    ("gotta", "have to", "gotta"),
    ("idk", "I don't know", "idk"),
];

const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?'];

#[derive(Debug, Clone)]
struct CasualTerm {
    id: &'static str,
    term: &'static str,
    matcher: Regex,
    replacement: &'static str,
}

/// Fallback engine for the general domain.
#[derive(Debug, Clone)]
pub struct GeneralRuleEngine {
    casual: Vec<CasualTerm>,
}

impl GeneralRuleEngine {
    pub fn new() -> Result<Self, DomainError> {
        let casual = CASUAL_TERMS
            .iter()
            .map(|&(term, replacement, id)| {
                Ok(CasualTerm {
                    id,
                    term,
                    matcher: compile(id, &format!(r"(?i)\b{}\b", regex::escape(term)))?,
                    replacement,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(Self { casual })
    }

    /// Refine `prompt`.
    ///
    /// Terms listed in `analysis.technical_terms` are left untouched by
    /// casual-term replacement.
    pub fn apply(&self, prompt: &str, analysis: Option<&AnalysisResult>) -> RuleApplicationResult {
        let mut result = RuleApplicationResult::start(prompt.trim());
        if result.text().is_empty() {
            return result;
        }

        for casual in &self.casual {
            if analysis.is_some_and(|a| a.has_technical_term(casual.term)) {
                continue;
            }
            if casual.matcher.is_match(result.text()) {
                let text = casual
                    .matcher
                    .replace_all(result.text(), casual.replacement)
                    .into_owned();
                result.set_text(text);
                result.record(
                    format!("general_{}", casual.id),
                    format!(
                        "Replaced casual term '{}' with '{}'",
                        casual.term, casual.replacement
                    ),
                );
            }
        }

        let starts_lowercase = result
            .text()
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase());
        if starts_lowercase {
            let text = capitalize_first(result.text());
            result.set_text(text);
            result.record(
                "general_capitalization".to_string(),
                "Capitalized the first letter".to_string(),
            );
        }

        if !result.text().ends_with(TERMINAL_PUNCTUATION) {
            let text = format!("{}.", result.text());
            result.set_text(text);
            result.record(
                "general_punctuation".to_string(),
                "Added terminal punctuation".to_string(),
            );
        }

        result.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GeneralRuleEngine {
        GeneralRuleEngine::new().unwrap()
    }

    #[test]
    fn test_casual_terms_capitalization_and_punctuation() {
        let result = engine().apply("can u help me pls", None);
        assert_eq!(result.refined(), "Can you help me please.");
        assert_eq!(
            result.rules_applied(),
            &[
                "general_pls",
                "general_u",
                "general_capitalization",
                "general_punctuation",
            ]
        );
    }

    #[test]
    fn test_already_clean_prompt_is_unchanged() {
        let result = engine().apply("  Summarize this article.  ", None);
        assert_eq!(result.refined(), "Summarize this article.");
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_question_mark_is_terminal() {
        let result = engine().apply("What is a monad?", None);
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_empty_prompt() {
        let result = engine().apply("   ", None);
        assert_eq!(result.refined(), "");
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_technical_terms_are_protected() {
        let analysis = AnalysisResult::new().with_technical_terms(["u"]);
        let result = engine().apply("Explain the u variable.", Some(&analysis));
        assert_eq!(result.refined(), "Explain the u variable.");
    }

    #[test]
    fn test_does_not_touch_words_containing_terms() {
        let result = engine().apply("Update your umbrella.", None);
        assert!(result.is_unchanged());
    }
}
