//! Film & video production rules

use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::registry::config::{DomainConfig, DomainExample, QualityWeights, TermAddendum};
use crate::rules::library::PatternLibrary;
use crate::rules::pattern::{EnhancementRule, PatternRule, RuleCategory};

const SYSTEM_PROMPT: &str = "You are an experienced film director and screenwriter. Turn the \
request into a production-ready brief covering story, visual style, shot design, and \
practical production constraints.";

fn library() -> Result<PatternLibrary, DomainError> {
    use RuleCategory::*;

    let substitutions = vec![
        PatternRule::substitute(
            VagueTerms,
            "nice_video",
            r"(?i)\bv[ií]deo\s+(?:bonito|chulo|bueno)\b|\b(?:nice|cool|good|pretty)\s+video\b",
            "visually compelling video",
            "'nice video' became a visually compelling video",
        )?
        .with_priority(10),
        PatternRule::substitute(
            VagueTerms,
            "epic",
            r"(?i)\b(?:[eé]pic[oa]|epic|impactante)\b",
            "high-impact, cinematic",
            "'epic' became a concrete visual register",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "emotional",
            r"(?i)\b(?:algo\s+emotivo|something\s+emotional)\b",
            "an emotionally resonant story",
            "'something emotional' became an emotionally resonant story",
        )?,
        PatternRule::substitute(
            Structure,
            "write_request",
            r"(?i)^\s*(?:hazme|haz|escr[ií]beme|escribe|crea|make\s+me|make|write\s+me|write|create)\s+(?:una?\s+|an?\s+)?",
            "Draft a professional treatment for a ",
            "request framed as a professional treatment",
        )?,
        PatternRule::substitute(
            Technical,
            "close_up",
            r"(?i)\b(?:primer\s+plano|close\s+up)\b",
            "close-up (CU)",
            "close-up shot notation",
        )?,
        PatternRule::substitute(
            Technical,
            "wide_shot",
            r"(?i)\b(?:plano\s+general|wide\s+shot)\b",
            "WS (wide establishing frame)",
            "wide shot notation",
        )?,
        PatternRule::substitute(
            Technical,
            "screenplay",
            r"(?i)\bgui[oó]n\b",
            "screenplay",
            "guion referred to as screenplay",
        )?,
        PatternRule::substitute(
            Technical,
            "take",
            r"(?i)\btoma(s?)\b",
            "take$1",
            "toma referred to as take",
        )?,
    ];

    let enhancements = vec![
        EnhancementRule::contextual(
            "shot_list",
            r"(?i)\b(?:scenes?|escenas?|shots?|video|film|pel[ií]cula|treatment)\b",
            r"(?i)shot list",
            "Provide a shot list with framing, camera movement, and estimated duration for \
             each shot.",
            "shot list",
        )?,
        EnhancementRule::contextual(
            "genre_tone",
            r"(?i)\b(?:story|historia|screenplay|script|treatment|film|pel[ií]cula)\b",
            r"(?i)\bgenre\b",
            "Specify the genre, tone, and target runtime.",
            "genre and tone",
        )?,
        EnhancementRule::best_practice(
            "industry_format",
            r"(?i)\b(?:screenplay|script|dialogue|di[aá]logos?)\b",
            r"(?i)industry-standard",
            "Use industry-standard formatting: sluglines, action lines, and character cues.",
            "industry-standard formatting",
        )?,
        EnhancementRule::best_practice(
            "production_plan",
            r"(?i)\b(?:shoot|rodaje|filming|budget|presupuesto|production)\b",
            r"(?i)production schedule",
            "Include a production schedule and list location, crew, and equipment \
             requirements.",
            "production planning",
        )?,
    ];

    PatternLibrary::new(substitutions, enhancements)
}

pub fn config() -> Result<DomainConfig, DomainError> {
    let config = DomainConfig::new(
        Domain::Cine,
        "Film, video, screenwriting, and audiovisual production",
    )
    .with_rules(library()?)
    .with_detection_patterns(&[
        r"(?i)\b(?:short\s+film|film|pel[ií]cula|movie|cine|cinema|cortometraje)\b",
        r"(?i)\b(?:screenplay|script|gui[oó]n|escenas?|scenes?|shots?|planos?|storyboard)\b",
        r"(?i)\b(?:v[ií]deo|director|cinematograf\w*|rodaje|footage)\b",
    ])?
    .with_weights(QualityWeights::new(0.25, 0.25, 0.20, 0.30))
    .with_system_prompt(SYSTEM_PROMPT)
    .with_addendum(TermAddendum::new(
        ["drone", "gimbal", "arri", "blackmagic", "premiere", "davinci", "after effects"],
        "Tailor the technical notes to the equipment and post-production tools mentioned.",
    ))
    .with_example(DomainExample::new(
        "write a nice video about my city",
        "Draft a professional treatment for a visually compelling video about my city",
        "Vague adjective made concrete and the request framed as a treatment with a shot \
         list and genre guidance.",
        0.25,
    ));

    Ok(config)
}
