//! DevOps & infrastructure rules

use crate::core::domain::Domain;
use crate::core::error::DomainError;
use crate::registry::config::{DomainConfig, DomainExample, QualityWeights, TermAddendum};
use crate::rules::library::PatternLibrary;
use crate::rules::pattern::{EnhancementRule, PatternRule, Replacement, RuleCategory};

const SYSTEM_PROMPT: &str = "You are a senior DevOps engineer. Turn the request into a \
production-ready plan covering environments, automation, security, observability, and \
rollback.";

fn library() -> Result<PatternLibrary, DomainError> {
    use RuleCategory::*;

    let substitutions = vec![
        PatternRule::substitute(
            VagueTerms,
            "fast_deploy",
            r"(?i)\b(?:despliegue\s+r[aá]pido|fast\s+deploy(?:ment)?|quick\s+deploy(?:ment)?)\b",
            "zero-downtime, automated deployment",
            "'fast deploy' became a zero-downtime, automated deployment",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "the_server",
            r"(?i)\b(?:el\s+servidor|un\s+servidor|the\s+server|a\s+server)\b",
            "the target environment (name the provider, region, and instance size)",
            "'the server' became an explicit target environment",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "secure",
            r"(?i)\b(?:muy\s+seguro|secure\s+enough|really\s+secure)\b",
            "hardened according to CIS benchmarks",
            "'secure' became a hardening baseline",
        )?,
        PatternRule::substitute(
            Structure,
            "setup_request",
            r"(?i)^\s*(?:hazme|haz|cr[eé]ame|crea|config[uú]rame|configura|make\s+me|make|set\s+up|setup|create)\s+(?:una?\s+|an?\s+)?",
            "Prepare a production-ready configuration for a ",
            "request framed as a production-ready configuration",
        )?,
        PatternRule::substitute(
            Technical,
            "k8s",
            r"(?i)\bk8s\b",
            "Kubernetes",
            "k8s spelled out",
        )?,
        PatternRule::substitute(
            Technical,
            "cicd",
            r"\bci/cd\b",
            "CI/CD",
            "CI/CD capitalized",
        )?,
        PatternRule::substitute(
            Technical,
            "dockerfile",
            r"(?i)\bdocker\s+file\b",
            "Dockerfile",
            "Dockerfile spelling",
        )?,
        PatternRule::new(
            Technical,
            "container",
            r"(?i)\bcontenedor(es)?\b",
            Replacement::dynamic(|caps| {
                Ok(if caps.get(1).is_some() {
                    "containers".to_string()
                } else {
                    "container".to_string()
                })
            }),
            "contenedor referred to as container",
        )?,
    ];

    // rollback comes first: its text mentions a deployment, which triggers monitoring
    let enhancements = vec![
        EnhancementRule::contextual(
            "rollback",
            r"(?i)\b(?:deploy\w*|release|despliegues?)\b",
            r"(?i)\brollback\b",
            "Describe the rollback strategy if a deployment fails.",
            "rollback strategy",
        )?,
        EnhancementRule::contextual(
            "monitoring",
            r"(?i)\b(?:deploy\w*|pipelines?|kubernetes|production|producci[oó]n|servers?)\b",
            r"(?i)\bmonitoring\b",
            "Add monitoring and alerting: health checks, metrics dashboards, and alerts \
             routed to the on-call rotation.",
            "monitoring and alerting",
        )?,
        EnhancementRule::best_practice(
            "secret_management",
            r"(?i)\b(?:secrets?|credentials?|passwords?|api\s+keys?|tokens?|contrase[ñn]as?)\b",
            r"(?i)secret manager",
            "Load secrets from a secret manager (Vault, AWS Secrets Manager) and never commit \
             them to the repository.",
            "secret management",
        )?,
        EnhancementRule::best_practice(
            "infrastructure_as_code",
            r"(?i)\b(?:infrastructure|infraestructura|cloud|nube|aws|azure|gcp|terraform|servers?)\b",
            r"(?i)infrastructure as code",
            "Define the infrastructure as code (Terraform or Pulumi) and keep it under version \
             control.",
            "infrastructure as code",
        )?,
    ];

    PatternLibrary::new(substitutions, enhancements)
}

pub fn config() -> Result<DomainConfig, DomainError> {
    let config = DomainConfig::new(
        Domain::Devops,
        "CI/CD, containers, cloud infrastructure, and operations",
    )
    .with_rules(library()?)
    .with_detection_patterns(&[
        r"(?i)\b(?:devops|ci/cd|pipelines?|deploy\w*|despliegues?)\b",
        r"(?i)\b(?:docker\w*|kubernetes|k8s|helm|terraform|ansible|containers?|contenedor(?:es)?)\b",
        r"(?i)\b(?:aws|azure|gcp|cloud|nube|infrastructure|infraestructura|servers?|servidor(?:es)?|nginx)\b",
    ])?
    .with_weights(QualityWeights::new(0.20, 0.30, 0.30, 0.20))
    .with_system_prompt(SYSTEM_PROMPT)
    .with_addendum(TermAddendum::new(
        ["aws", "azure", "gcp", "google cloud", "digitalocean"],
        "Follow the conventions of the cloud provider mentioned: managed services, \
         least-privilege IAM, and multi-zone redundancy.",
    ))
    .with_example(DomainExample::new(
        "set up a fast deploy for the server",
        "Prepare a production-ready configuration for a zero-downtime, automated deployment for the target environment (name the provider, region, and instance size)",
        "Vague terms made concrete, then rollback and monitoring guidance appended.",
        0.3,
    ));

    Ok(config)
}
