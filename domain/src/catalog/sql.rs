//! SQL & database design rules

use crate::core::domain::Domain;
use crate::core::error::{DomainError, RuleError};
use crate::registry::config::{DomainConfig, DomainExample, QualityWeights, TermAddendum};
use crate::rules::library::PatternLibrary;
use crate::rules::pattern::{EnhancementRule, PatternRule, Replacement, RuleCategory};

const SYSTEM_PROMPT: &str = "You are a senior database architect. Turn the request into a \
precise specification: entities and relationships, data types, constraints, indexing \
strategy, and the exact SQL dialect to target.";

/// Spanish or English entity noun -> plural snake_case identifier
fn entity_identifier(noun: &str) -> Result<&'static str, RuleError> {
    let noun = noun.to_lowercase();
    let singular = noun.strip_suffix('s').unwrap_or(&noun);
    match singular {
        "usuario" | "user" => Ok("users"),
        "cliente" | "customer" => Ok("customers"),
        "producto" | "product" => Ok("products"),
        "pedido" | "order" => Ok("orders"),
        other => Err(RuleError::new(format!("no identifier for entity '{}'", other))),
    }
}

fn library() -> Result<PatternLibrary, DomainError> {
    use RuleCategory::*;

    let substitutions = vec![
        // Vague terms
        PatternRule::substitute(
            VagueTerms,
            "decorative_adjective",
            r"(?i)\b(?:bonit[oa]s?|lind[oa]s?|nice|pretty)\b",
            "well-designed",
            "decorative adjective turned into a design requirement",
        )?,
        // Overlaps the generic adjective rule, so it must win
        PatternRule::substitute(
            VagueTerms,
            "nice_table",
            r"(?i)\b(?:bonita|linda|buena|nice|pretty|good)\s+(?:tabla|table)\b",
            "well-structured, normalized database table",
            "'nice table' became a well-structured, normalized database table",
        )?
        .with_priority(10),
        PatternRule::substitute(
            VagueTerms,
            "some_data",
            r"(?i)\b(?:algunos\s+datos|unos\s+datos|some\s+data)\b",
            "a representative dataset",
            "'some data' became a representative dataset",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "fast_query",
            r"(?i)\b(?:fast|quick|r[aá]pida)\s+(?:query|consulta)\b",
            "performance-optimized query",
            "'fast query' became a performance-optimized query",
        )?,
        PatternRule::substitute(
            VagueTerms,
            "stuff",
            r"(?i)\b(?:stuff|things|cosas)\b",
            "records",
            "'stuff' became records",
        )?,
        // Structure
        PatternRule::substitute(
            Structure,
            "query_request",
            r"(?i)^\s*(?:hazme|dame|escr[ií]beme|make\s+me|give\s+me|write\s+me|get\s+me)\s+(?:una?\s+|an?\s+)?(?:consulta|query)\b",
            "Write a SQL query",
            "query request framed as a SQL task",
        )?
        .with_priority(10),
        PatternRule::substitute(
            Structure,
            "build_request",
            r"(?i)^\s*(?:hazme|h[aá]game|haz|cr[eé]ame|crea|make\s+me|make|create\s+me|create|build)\s+(?:una?\s+|an?\s+)?",
            "Generate a database schema for a ",
            "command opener framed as a schema design task",
        )?,
        PatternRule::substitute(
            Structure,
            "how_to",
            r"(?i)^\s*(?:c[oó]mo\s+(?:hago|puedo)|how\s+(?:do|can)\s+i)\s+",
            "Explain step by step how to ",
            "question framed as a step-by-step explanation",
        )?,
        // Technical standardization
        PatternRule::new(
            Technical,
            "entity_plural",
            r"(?i)\b(?:para|for)\s+(?:the\s+|los\s+|las\s+)?(usuarios?|clientes?|productos?|pedidos?|users?|customers?|products?|orders?)\b",
            Replacement::dynamic(|caps| {
                entity_identifier(&caps[1]).map(|id| format!("for `{}`", id))
            }),
            "entity names standardized to plural snake_case identifiers",
        )?,
        PatternRule::substitute(
            Technical,
            "sql_case",
            r"\bsql\b",
            "SQL",
            "SQL capitalized",
        )?,
        PatternRule::substitute(
            Technical,
            "postgres",
            r"\bpostgres(?:ql)?\b",
            "PostgreSQL",
            "PostgreSQL spelled out",
        )?,
        PatternRule::substitute(
            Technical,
            "mysql",
            r"\bmysql\b",
            "MySQL",
            "MySQL capitalized",
        )?,
        PatternRule::substitute(
            Technical,
            "primary_key",
            r"(?i)\b(?:llave|clave)\s+primaria\b",
            "primary key",
            "primary key terminology",
        )?,
        PatternRule::substitute(
            Technical,
            "foreign_key",
            r"(?i)\b(?:llave|clave)\s+for[aá]nea\b",
            "foreign key",
            "foreign key terminology",
        )?,
    ];

    let enhancements = vec![
        EnhancementRule::contextual(
            "sample_data",
            r"(?i)\b(?:tables?|tablas?|schemas?|esquemas?)\b",
            r"(?i)\b(?:sample|example|seed)\s+data\b",
            "Include sample data: provide 3-5 representative INSERT statements so the \
             schema can be tested immediately.",
            "sample data for immediate testing",
        )?,
        EnhancementRule::contextual(
            "constraints",
            r"(?i)\b(?:tables?|tablas?|schemas?|entity|entities)\b",
            r"(?i)\bconstraints?\b",
            "Define primary keys, foreign keys, and NOT NULL / UNIQUE constraints explicitly.",
            "explicit constraints",
        )?,
        EnhancementRule::contextual(
            "query_performance",
            r"(?i)\b(?:query|queries|consultas?|select|join)\b",
            r"(?i)\bindex(?:es)?\b",
            "Recommend indexes that support the filter and join columns, and describe the \
             expected execution plan.",
            "index recommendations",
        )?,
        EnhancementRule::best_practice(
            "naming",
            r"(?i)\b(?:tables?|schemas?|columns?|columnas?)\b",
            r"(?i)naming conventions?",
            "Follow consistent naming conventions: snake_case identifiers, plural relation \
             names, singular column names.",
            "naming conventions",
        )?,
        EnhancementRule::best_practice(
            "normalization",
            r"(?i)\bnormaliz",
            r"(?i)third normal form|\b3NF\b",
            "Normalize to third normal form (3NF) unless a denormalization is justified by \
             read performance.",
            "normalization target",
        )?,
        EnhancementRule::best_practice(
            "migration_safety",
            r"(?i)\b(?:alter|drop|migrat\w*|migraci[oó]n)\b",
            r"(?i)\brollback\b",
            "Write each change as a reversible migration with an explicit rollback step.",
            "migration safety",
        )?,
        EnhancementRule::best_practice(
            "credential_storage",
            r"(?i)\b(?:passwords?|contrase[ñn]as?|credentials?|tokens?)\b",
            r"(?i)\bhash",
            "Never store credentials in plain text: store salted hashes (bcrypt or argon2).",
            "credential storage",
        )?,
    ];

    PatternLibrary::new(substitutions, enhancements)
}

pub fn config() -> Result<DomainConfig, DomainError> {
    let config = DomainConfig::new(
        Domain::Sql,
        "Database schema design, SQL queries, and data modeling",
    )
    .with_rules(library()?)
    .with_detection_patterns(&[
        r"(?i)\b(?:sql|mysql|postgres(?:ql)?|sqlite|databases?|base\s+de\s+datos)\b",
        r"(?i)\b(?:tablas?|tables?|schemas?|esquemas?|columns?|columnas?)\b",
        r"(?i)\b(?:query|queries|consultas?|select|insert|update|delete|join|index(?:es)?)\b",
    ])?
    .with_weights(QualityWeights::new(0.25, 0.35, 0.25, 0.15))
    .with_system_prompt(SYSTEM_PROMPT)
    .with_addendum(TermAddendum::new(
        ["postgres", "mysql", "sqlite", "oracle", "sql server"],
        "Target the SQL dialect mentioned and use its idiomatic types and features.",
    ))
    .with_example(DomainExample::new(
        "hazme una bonita tabla para usuarios",
        "Generate a database schema for a well-structured, normalized database table for `users`",
        "Vague adjective and command opener replaced, entity standardized, then sample data, \
         constraints, naming and normalization guidance appended.",
        0.35,
    ))
    .with_example(DomainExample::new(
        "give me a query for the orders placed this month",
        "Write a SQL query for `orders` placed this month",
        "Request framed as a SQL task with index recommendations.",
        0.2,
    ));

    Ok(config)
}
