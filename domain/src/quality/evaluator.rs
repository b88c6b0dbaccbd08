//! Sub-score sources
//!
//! [`PromptEvaluator`] is the seam between raw prompt text and the scorer.
//! [`HeuristicEvaluator`] is the deterministic default; tests swap in
//! fixed-value evaluators.

use super::score::SubScores;
use crate::core::analysis::AnalysisResult;
use crate::core::domain::Domain;
use crate::core::string::{is_vague_word, word_count};

/// Produces sub-scores for a prompt.
pub trait PromptEvaluator: Send + Sync {
    fn evaluate(&self, prompt: &str, domain: Domain, analysis: Option<&AnalysisResult>)
    -> SubScores;
}

/// Words that signal explicit requirements
const REQUIREMENT_WORDS: &[&str] = &[
    "include", "define", "provide", "must", "should", "ensure", "specify", "format",
    "constraints", "example", "examples", "requirements", "output", "steps",
];

/// Professional openers that frame a task
const TASK_OPENERS: &[&str] = &[
    "generate", "write", "design", "develop", "draft", "prepare", "explain", "create",
    "describe", "analyze", "summarize", "list", "build", "review",
];

/// Per-domain vocabulary that counts as specific
fn domain_vocabulary(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Sql => &[
            "sql", "schema", "table", "index", "query", "primary", "foreign", "constraint",
            "join", "normalized", "postgresql", "mysql",
        ],
        Domain::Branding => &[
            "brand", "logo", "palette", "typography", "tagline", "audience", "positioning",
            "identity", "competitors",
        ],
        Domain::Cine => &[
            "screenplay", "shot", "scene", "treatment", "genre", "runtime", "close-up",
            "framing", "storyboard",
        ],
        Domain::Saas => &[
            "saas", "tenant", "pricing", "subscription", "churn", "mrr", "onboarding",
            "authentication", "billing",
        ],
        Domain::Devops => &[
            "kubernetes", "docker", "ci/cd", "pipeline", "deployment", "terraform", "rollback",
            "monitoring", "container",
        ],
        Domain::General => &[],
    }
}

/// Deterministic text heuristics.
///
/// - clarity: vague-word penalties, capitalization, terminal punctuation;
///   blended with `analysis.ambiguity_score` when supplied
/// - specificity: domain vocabulary, numbers, long words
/// - structure: task opener, multiple sentences or paragraphs, list markers
/// - completeness: length and explicit requirement words
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn clarity(&self, text: &str, words: &[String], analysis: Option<&AnalysisResult>) -> f64 {
        let vague = words.iter().filter(|w| is_vague_word(w)).count();
        let mut clarity = 1.0 - 0.15 * vague as f64;
        if !text.chars().next().is_some_and(|c| c.is_uppercase()) {
            clarity -= 0.1;
        }
        if !text.ends_with(['.', '!', '?']) {
            clarity -= 0.1;
        }
        if words.len() < 4 {
            clarity -= 0.2;
        }
        let clarity = clarity.max(0.0);

        match analysis {
            Some(a) => 0.7 * clarity + 0.3 * (1.0 - a.ambiguity_score.clamp(0.0, 1.0)),
            None => clarity,
        }
    }

    fn specificity(&self, text: &str, words: &[String], domain: Domain) -> f64 {
        let vocabulary = domain_vocabulary(domain);
        let lower = text.to_lowercase();
        let vocab_hits = vocabulary.iter().filter(|v| lower.contains(*v)).count();
        let long_words = words.iter().filter(|w| w.chars().count() > 7).count();
        let has_numbers = text.chars().any(|c| c.is_ascii_digit());

        let mut specificity = 0.2;
        specificity += (0.1 * vocab_hits as f64).min(0.4);
        specificity += (0.04 * long_words as f64).min(0.25);
        if has_numbers {
            specificity += 0.15;
        }
        specificity
    }

    fn structure(&self, text: &str, words: &[String]) -> f64 {
        let mut structure: f64 = 0.2;
        if words
            .first()
            .is_some_and(|w| TASK_OPENERS.contains(&w.as_str()))
        {
            structure += 0.25;
        }
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();
        if sentences >= 2 || text.contains("\n\n") {
            structure += 0.25;
        }
        let has_list = text.lines().any(|line| {
            let line = line.trim_start();
            line.starts_with("- ")
                || line.starts_with("* ")
                || line.split_once(". ").is_some_and(|(n, _)| n.parse::<u32>().is_ok())
        });
        if has_list {
            structure += 0.2;
        }
        if text.ends_with(['.', '!', '?', ':']) {
            structure += 0.1;
        }
        structure
    }

    fn completeness(&self, text: &str, words: &[String]) -> f64 {
        let length = (word_count(text) as f64 / 60.0).min(1.0) * 0.6;
        let requirements = words
            .iter()
            .filter(|w| REQUIREMENT_WORDS.contains(&w.as_str()))
            .count();
        length + (0.1 * requirements as f64).min(0.4)
    }
}

impl PromptEvaluator for HeuristicEvaluator {
    fn evaluate(
        &self,
        prompt: &str,
        domain: Domain,
        analysis: Option<&AnalysisResult>,
    ) -> SubScores {
        let text = prompt.trim();
        if text.is_empty() {
            return SubScores::default();
        }

        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric() && c != '/' && c != '-')
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();

        SubScores::new(
            self.clarity(text, &words, analysis).clamp(0.0, 1.0),
            self.specificity(text, &words, domain).clamp(0.0, 1.0),
            self.structure(text, &words).clamp(0.0, 1.0),
            self.completeness(text, &words).clamp(0.0, 1.0),
        )
    }
}
