//! Branding & marketing rules

use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::registry::config::{DomainConfig, DomainExample, QualityWeights, TermAddendum};
use crate::rules::library::PatternLibrary;
use crate::rules::pattern::{EnhancementRule, PatternRule, RuleCategory};

const SYSTEM_PROMPT: &str = "You are a senior brand strategist. Turn the request into a \
creative brief that defines the brand's positioning, audience, tone of voice, and concrete \
deliverables with acceptance criteria.";

fn library() -> Result<PatternLibrary, DomainError> {
    use RuleCategory::*;

    let substitutions = vec![
        PatternRule::substitute(
            VagueTerms,
            "nice_logo",
            r"(?i)\blogo\s+(?:bonito|lindo|chulo|bueno)\b|\b(?:nice|cool|pretty|good)\s+logo\b",
            "distinctive, memorable logo",
            "'nice logo' became a distinctive, memorable logo",
        )?
        .with_priority(10),
        PatternRule::substitute(
            VagueTerms,
            "catchy",
            r"(?i)\b(?:algo\s+pegadizo|something\s+catchy|catchy)\b",
            "memorable and on-brand",
            "'catchy' became memorable and on-brand",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "modern",
            r"(?i)\b(?:modern[oa]|modern)\b",
            "contemporary and minimalist",
            "'modern' became an explicit visual direction",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "cool",
            r"(?i)\b(?:cool|chul[oa]|guay)\b",
            "distinctive",
            "'cool' became distinctive",
        )?,
        PatternRule::substitute(
            Structure,
            "deliverable_request",
            r"(?i)^\s*(?:hazme|haz|cr[eé]ame|crea|dise[ñn]ame|dise[ñn]a|necesito|quiero|make\s+me|make|create|design|i\s+need|i\s+want)\s+(?:una?\s+|an?\s+)?",
            "Develop a brand identity deliverable: a ",
            "request framed as a brand identity deliverable",
        )?,
        PatternRule::substitute(
            Technical,
            "palette",
            r"(?i)\b(?:colores|colors|colours)\b",
            "color palette (with HEX codes)",
            "colors specified as a palette with HEX codes",
        )?,
        PatternRule::substitute(
            Technical,
            "typography",
            r"(?i)\b(?:fuentes?|fonts?|tipo\s+de\s+letra)\b",
            "typography",
            "fonts referred to as typography",
        )?,
        PatternRule::substitute(
            Technical,
            "tagline",
            r"(?i)\b(?:eslogan|slogan)\b",
            "tagline",
            "slogan referred to as tagline",
        )?,
    ];

    let enhancements = vec![
        EnhancementRule::contextual(
            "target_audience",
            r"(?i)\b(?:brand|marca|logo|campaign|campa[ñn]a|tagline)\b",
            r"(?i)target audience",
            "Define the target audience: demographics, psychographics, and the problem the \
             brand solves for them.",
            "target audience",
        )?,
        EnhancementRule::contextual(
            "differentiation",
            r"(?i)\b(?:brand|marca|logo|identity)\b",
            r"(?i)\bcompetitors?\b",
            "Differentiate from at least three competitors and state the unique value \
             proposition.",
            "competitive differentiation",
        )?,
        EnhancementRule::best_practice(
            "voice_consistency",
            r"(?i)\b(?:tagline|copy|message|mensaje|campaign|campa[ñn]a)\b",
            r"(?i)voice and tone",
            "Keep all copy consistent with a documented voice and tone guide (vocabulary, \
             personality, do and don't examples).",
            "consistent voice",
        )?,
        EnhancementRule::best_practice(
            "visual_accessibility",
            r"(?i)\b(?:logo|color palette|typography)\b",
            r"(?i)\bcontrast\b",
            "Check color contrast against WCAG AA and make sure the mark still reads in \
             monochrome and at small sizes.",
            "visual accessibility",
        )?,
    ];

    PatternLibrary::new(substitutions, enhancements)
}

pub fn config() -> Result<DomainConfig, DomainError> {
    let config = DomainConfig::new(
        Domain::Branding,
        "Brand identity, logos, taglines, and marketing campaigns",
    )
    .with_rules(library()?)
    .with_detection_patterns(&[
        r"(?i)\b(?:brand(?:ing)?|marca|rebrand\w*)\b",
        r"(?i)\b(?:logo(?:tipo)?s?|slogan|tagline|eslogan)\b",
        r"(?i)\b(?:marketing|campaign|campa[ñn]a|identity|identidad|audience|p[uú]blico\s+objetivo)\b",
    ])?
    .with_weights(QualityWeights::new(0.30, 0.20, 0.20, 0.30))
    .with_system_prompt(SYSTEM_PROMPT)
    .with_addendum(TermAddendum::new(
        ["instagram", "tiktok", "linkedin", "social"],
        "Adapt every deliverable to the social platforms mentioned, respecting each \
         platform's formats and character limits.",
    ))
    .with_example(DomainExample::new(
        "make a nice logo for my coffee shop",
        "Develop a brand identity deliverable: a distinctive, memorable logo for my coffee shop",
        "Vague adjective made concrete, request framed as a deliverable, then audience, \
         differentiation and accessibility guidance appended.",
        0.3,
    ));

    Ok(config)
}
