//! Built-in domain catalog
//!
//! Declarative configurations for the five specialized domains plus the
//! general fallback. Appended guidance always satisfies its own "already
//! present" condition, so refining refined text appends nothing new.

pub mod branding;
pub mod cine;
pub mod devops;
pub mod general;
pub mod saas;
pub mod sql;

use crate::core::error::DomainError;
use crate::registry::config::DomainConfig;

/// Built-in specialized domains, in registration order
pub fn builtin_configs() -> Result<Vec<DomainConfig>, DomainError> {
    Ok(vec![
        sql::config()?,
        branding::config()?,
        cine::config()?,
        saas::config()?,
        devops::config()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Domain;
    use crate::registry::DomainRegistry;

    #[test]
    fn test_builtin_order_matches_specialized_domains() {
        let domains: Vec<_> = builtin_configs()
            .unwrap()
            .into_iter()
            .map(|c| c.domain)
            .collect();
        assert_eq!(domains, Domain::SPECIALIZED.to_vec());
    }

    #[test]
    fn test_every_config_validates() {
        for config in builtin_configs().unwrap() {
            config.validate().unwrap();
            assert!(!config.detection_patterns.is_empty());
            assert!(!config.rules.is_empty());
        }
        general::config().validate().unwrap();
    }

    #[test]
    fn test_appended_text_satisfies_its_own_unless() {
        for config in builtin_configs().unwrap() {
            let rules = config.rules;
            for rule in rules.contextual().iter().chain(rules.best_practices()) {
                let unless = rule.unless.as_ref().unwrap();
                assert!(
                    unless.is_match(&rule.append),
                    "{}: {} would append twice",
                    config.domain,
                    rule.id
                );
            }
        }
    }

    #[test]
    fn test_provenance_is_category_prefix_and_description() {
        for config in builtin_configs().unwrap() {
            let rules = config.rules;
            let substitutions = rules
                .vague()
                .iter()
                .chain(rules.structure())
                .chain(rules.technical())
                .map(|r| (r.category, &r.description, r.provenance()));
            let enhancements = rules
                .contextual()
                .iter()
                .chain(rules.best_practices())
                .map(|r| (r.category, &r.description, r.provenance()));
            for (category, description, provenance) in substitutions.chain(enhancements) {
                assert_eq!(
                    provenance,
                    format!("{}_{}", category.prefix(), description),
                    "{}",
                    config.domain
                );
            }
        }
    }

    #[test]
    fn test_examples_reproduce_first_paragraph() {
        let registry = DomainRegistry::with_builtin_domains().unwrap();
        for config in registry.configs() {
            for example in &config.examples {
                let result = registry.apply_domain_rules(&example.before, config.domain, None);
                let first = result.refined().split("\n\n").next().unwrap();
                assert_eq!(first, example.after, "{}", config.domain);
            }
        }
    }

    #[test]
    fn test_second_pass_is_stable() {
        let registry = DomainRegistry::with_builtin_domains().unwrap();
        let prompts = [
            ("hazme una bonita tabla para usuarios", Domain::Sql),
            ("give me a fast query for the customers with stuff", Domain::Sql),
            ("add a column and drop the old password field", Domain::Sql),
            ("make a nice logo with modern colors and a catchy slogan", Domain::Branding),
            ("escribe un guion con primer plano y tomas", Domain::Cine),
            ("write an epic film shoot plan", Domain::Cine),
            ("build an app with login, pagos and many users", Domain::Saas),
            ("set up a fast deploy for the server with k8s and contenedores", Domain::Devops),
            ("release the api tokens to aws", Domain::Devops),
        ];

        for (prompt, domain) in prompts {
            let first = registry.apply_domain_rules(prompt, domain, None);
            let second = registry.apply_domain_rules(first.refined(), domain, None);
            assert!(
                second.is_unchanged(),
                "{} changed on second pass: {:?}",
                prompt,
                second.rules_applied()
            );
        }
    }
}
