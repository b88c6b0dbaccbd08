//! SaaS product rules

use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::registry::config::{DomainConfig, DomainExample, QualityWeights, TermAddendum};
use crate::rules::library::PatternLibrary;
use crate::rules::pattern::{EnhancementRule, PatternRule, RuleCategory};

const SYSTEM_PROMPT: &str = "You are a SaaS product architect. Turn the request into a \
product specification covering target customers, core features, pricing model, \
architecture, and success metrics.";

fn library() -> Result<PatternLibrary, DomainError> {
    use RuleCategory::*;

    let substitutions = vec![
        PatternRule::substitute(
            VagueTerms,
            "an_app",
            r"(?i)\b(?:una\s+app|an\s+app|una\s+aplicaci[oó]n)\b",
            "a multi-tenant SaaS application",
            "'an app' became a multi-tenant SaaS application",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "scales",
            r"(?i)\b(?:que\s+escale|that\s+scales|escalable|scalable)\b",
            "designed for horizontal scaling",
            "'scalable' became designed for horizontal scaling",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "many_users",
            r"(?i)\b(?:mucha\s+gente|muchos\s+usuarios|lots\s+of\s+users|many\s+users)\b",
            "a clearly stated number of concurrent users",
            "'many users' became a stated concurrency target",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "easy_to_use",
            r"(?i)\b(?:f[aá]cil\s+de\s+usar|easy\s+to\s+use|user-friendly)\b",
            "intuitive for first-time users (measured by onboarding completion)",
            "'easy to use' became a measurable usability goal",
        )?,
        PatternRule::substitute(
            Structure,
            "build_request",
            r"(?i)^\s*(?:hazme|haz|cr[eé]ame|crea|constr[uú]yeme|make\s+me|make|build\s+me|build|create)\s+(?:una?\s+|an?\s+)?",
            "Design the architecture and feature set for a ",
            "request framed as a product design task",
        )?,
        PatternRule::substitute(
            Technical,
            "subscription",
            r"(?i)\bsuscripci[oó]n(?:es)?\b",
            "subscription billing",
            "suscripción referred to as subscription billing",
        )?,
        PatternRule::substitute(
            Technical,
            "authentication",
            r"(?i)\b(?:login|log-in|inicio\s+de\s+sesi[oó]n)\b",
            "authentication",
            "login referred to as authentication",
        )?,
        PatternRule::substitute(
            Technical,
            "payments",
            r"(?i)\bpagos?\b",
            "payment processing",
            "pagos referred to as payment processing",
        )?,
        PatternRule::substitute(
            Technical,
            "mrr",
            r"\bmrr\b",
            "monthly recurring revenue (MRR)",
            "MRR spelled out",
        )?,
    ];

    let enhancements = vec![
        EnhancementRule::contextual(
            "pricing_tiers",
            r"(?i)\b(?:saas|subscription|pricing|billing|plans?)\b",
            r"(?i)pricing tiers",
            "Outline pricing tiers (free, pro, enterprise) with the features and usage limits \
             of each.",
            "pricing tiers",
        )?,
        EnhancementRule::contextual(
            "success_metrics",
            r"(?i)\b(?:saas|startup|product|users?)\b",
            r"(?i)\bchurn\b",
            "Define success metrics: activation rate, churn, MRR growth, and customer \
             acquisition cost.",
            "success metrics",
        )?,
        EnhancementRule::best_practice(
            "tenant_isolation",
            r"(?i)\b(?:saas|multi-tenant|tenants?|architecture)\b",
            r"(?i)tenant isolation",
            "Enforce tenant isolation at the data layer and document the tenancy model.",
            "tenant isolation",
        )?,
        EnhancementRule::best_practice(
            "security_framework",
            r"(?i)\b(?:authentication|users?|accounts?|cuentas?)\b",
            r"(?i)security framework",
            "Apply a recognized security framework (OWASP ASVS): MFA, role-based access \
             control, and audit logging.",
            "security framework",
        )?,
    ];

    PatternLibrary::new(substitutions, enhancements)
}

pub fn config() -> Result<DomainConfig, DomainError> {
    let config = DomainConfig::new(
        Domain::Saas,
        "Software-as-a-service products, pricing, and growth",
    )
    .with_rules(library()?)
    .with_detection_patterns(&[
        r"(?i)\b(?:saas|b2b|multi-?tenant|tenants?)\b",
        r"(?i)\b(?:subscriptions?|suscripci[oó]n(?:es)?|pricing|precios|billing|facturaci[oó]n|mrr|churn)\b",
        r"(?i)\b(?:onboarding|dashboard|startup|freemium|trial)\b",
    ])?
    .with_weights(QualityWeights::new(0.20, 0.30, 0.25, 0.25))
    .with_system_prompt(SYSTEM_PROMPT)
    .with_addendum(TermAddendum::new(
        ["stripe", "paddle", "chargebee"],
        "Describe the billing integration with the payment provider mentioned, including \
         webhooks and failed-payment handling.",
    ))
    .with_example(DomainExample::new(
        "build an app that scales for gyms",
        "Design the architecture and feature set for a multi-tenant SaaS application designed for horizontal scaling for gyms",
        "Vague scope made concrete, then pricing, metrics and tenancy guidance appended.",
        0.3,
    ));

    Ok(config)
}
