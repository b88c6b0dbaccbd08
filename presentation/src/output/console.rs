//! Console output formatter for refinement results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use refinery_application::StoredPrompt;
use refinery_domain::{
    ComparisonResult, Domain, DomainDetection, DomainRegistry, MetricDirection, OutputFormat,
    QualityScore, QualityWeights, RefinementReport, Severity,
};
use serde::Serialize;

/// Formats refinement results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete refinement report
    pub fn format(report: &RefinementReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Prompt Refinement"));
        output.push('\n');

        output.push_str(&format!(
            "{} {} ({})\n\n",
            "Domain:".cyan().bold(),
            report.domain.display_name(),
            report.domain_source
        ));

        output.push_str(&format!("{}\n{}\n\n", "Original:".cyan().bold(), report.original));
        output.push_str(&format!(
            "{}\n{}\n",
            "Refined:".green().bold(),
            report.refined
        ));

        output.push_str(&Self::section_header("Quality"));
        output.push_str(&Self::score_table(&report.original_score, &report.refined_score));
        let delta = report.score_delta() * 100.0;
        let delta_text = format!("{:+.1} points", delta);
        output.push_str(&format!(
            "\n{} {}\n",
            "Change:".bold(),
            if delta > 0.0 {
                delta_text.green()
            } else if delta < 0.0 {
                delta_text.red()
            } else {
                delta_text.dimmed()
            }
        ));

        output.push_str(&Self::section_header("Rules Applied"));
        if report.is_unchanged() {
            output.push_str(&format!("{}\n", "No rules matched.".dimmed()));
        } else {
            for (rule, improvement) in report.rules_applied.iter().zip(&report.improvements) {
                output.push_str(&format!("  * {} {}\n", rule.yellow(), improvement.dimmed()));
            }
        }

        if !report.validation_issues.is_empty() {
            output.push_str(&Self::section_header("Validation"));
            for issue in &report.validation_issues {
                let label = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                output.push_str(&format!("  {} [{}] {}\n", label, issue.rule, issue.message));
            }
        }

        output.push_str(&Self::section_header("System Prompt"));
        output.push_str(&Self::indent(&report.system_prompt, "  "));
        output.push('\n');

        if let Some(id) = &report.stored_id {
            output.push_str(&format!("\n{} {}\n", "Saved as".dimmed(), id.bold()));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &RefinementReport) -> String {
        Self::to_json(report)
    }

    /// Format the refined prompt only (concise output)
    pub fn format_refined_only(report: &RefinementReport) -> String {
        format!("{}\n", report.refined)
    }

    /// Format a variant comparison
    pub fn format_comparison(result: &ComparisonResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::to_json(result),
            OutputFormat::Refined => result
                .winning_variant()
                .map(|v| format!("{}\n", v.prompt))
                .unwrap_or_default(),
            OutputFormat::Full => {
                let mut output = String::new();
                output.push_str(&Self::header("Prompt Comparison"));
                output.push('\n');

                if let Some(input) = &result.test_input {
                    output.push_str(&format!("{} {}\n", "Test input:".cyan().bold(), input));
                }

                for variant in &result.variants {
                    let title = format!("── {} ({}) ──", variant.id, variant.domain);
                    let title = if variant.id == result.winner {
                        title.green().bold()
                    } else {
                        title.yellow().bold()
                    };
                    output.push_str(&format!(
                        "\n{}\n{}\n{} {:.1}%  {} {}\n",
                        title,
                        variant.prompt,
                        "Overall:".dimmed(),
                        variant.score.overall() * 100.0,
                        "Rules that would apply:".dimmed(),
                        variant.rules_applied.len()
                    ));
                }

                output.push_str(&Self::section_header("Metrics"));
                for metric in &result.metrics {
                    let direction = match metric.direction {
                        MetricDirection::HigherIsBetter => "higher is better",
                        MetricDirection::LowerIsBetter => "lower is better",
                    };
                    let values = metric
                        .values
                        .iter()
                        .map(|v| format!("{:.2}", v.value))
                        .collect::<Vec<_>>()
                        .join(" / ");
                    output.push_str(&format!(
                        "  {:<14} {}  {} {} (gap {:.2}, {})\n",
                        metric.name,
                        values,
                        "best:".dimmed(),
                        metric.winner.bold(),
                        metric.significance,
                        direction
                    ));
                }

                output.push_str(&format!("\n{}\n", result.summary.bold()));
                output.push_str(&Self::footer());
                output
            }
        }
    }

    /// Format a detection with its per-domain score table
    pub fn format_detection(detection: &DomainDetection, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::to_json(detection),
            OutputFormat::Refined => format!("{}\n", detection.domain),
            OutputFormat::Full => {
                let mut output = format!(
                    "{} {} ({})\n",
                    "Detected domain:".cyan().bold(),
                    detection.domain.as_str().bold(),
                    detection.domain.display_name()
                );
                for (domain, score) in &detection.scores {
                    output.push_str(&format!("  {:<10} {}\n", domain.as_str(), score));
                }
                output
            }
        }
    }

    /// Format a domain's system prompt
    pub fn format_system_prompt(domain: Domain, prompt: &str, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::to_json(&serde_json::json!({
                "domain": domain,
                "system_prompt": prompt,
            })),
            _ => format!("{}\n", prompt),
        }
    }

    /// Format a domain's quality weights
    pub fn format_weights(
        domain: Domain,
        weights: &QualityWeights,
        format: OutputFormat,
    ) -> String {
        match format {
            OutputFormat::Json => Self::to_json(&serde_json::json!({
                "domain": domain,
                "weights": weights,
            })),
            _ => {
                let mut output = format!(
                    "{} {}\n",
                    "Quality weights:".cyan().bold(),
                    domain.display_name()
                );
                for (name, value) in [
                    ("clarity", weights.clarity),
                    ("specificity", weights.specificity),
                    ("structure", weights.structure),
                    ("completeness", weights.completeness),
                ] {
                    output.push_str(&format!("  {:<13} {:.2}\n", name, value));
                }
                output
            }
        }
    }

    /// Format the registered domains
    pub fn format_domains(registry: &DomainRegistry, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => {
                let domains: Vec<_> = registry
                    .configs()
                    .map(|c| {
                        serde_json::json!({
                            "domain": c.domain,
                            "name": c.domain.display_name(),
                            "description": c.description,
                            "weights": c.quality_weights,
                        })
                    })
                    .collect();
                Self::to_json(&domains)
            }
            _ => {
                let mut output = String::new();
                for config in registry.configs() {
                    output.push_str(&format!(
                        "{:<10} {}\n           {}\n",
                        config.domain.as_str().bold(),
                        config.domain.display_name(),
                        config.description.dimmed()
                    ));
                }
                output
            }
        }
    }

    /// Format saved prompts, newest first
    pub fn format_history(prompts: &[StoredPrompt], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::to_json(prompts),
            _ if prompts.is_empty() => format!("{}\n", "No saved prompts.".dimmed()),
            _ => {
                let mut output = String::new();
                for prompt in prompts {
                    output.push_str(&format!(
                        "{:<8} {:<9} {:>5.1}%  {}  {}\n",
                        prompt.id.bold(),
                        prompt.metadata.domain.as_str(),
                        prompt.score.overall * 100.0,
                        prompt.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                        Self::truncate(&prompt.refined, 60)
                    ));
                }
                output
            }
        }
    }

    /// Format one saved prompt
    pub fn format_stored(prompt: &StoredPrompt, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::to_json(prompt),
            OutputFormat::Refined => format!("{}\n", prompt.refined),
            OutputFormat::Full => {
                let mut output = String::new();
                output.push_str(&format!(
                    "{} {} ({}, {})\n\n",
                    "Saved prompt".cyan().bold(),
                    prompt.id.bold(),
                    prompt.metadata.domain,
                    prompt.created_at.to_rfc3339()
                ));
                output.push_str(&format!(
                    "{}\n{}\n\n",
                    "Original:".cyan().bold(),
                    prompt.metadata.original
                ));
                output.push_str(&format!("{}\n{}\n\n", "Refined:".green().bold(), prompt.refined));
                output.push_str(&format!(
                    "{} clarity {:.2}, specificity {:.2}, structure {:.2}, completeness {:.2}, overall {:.2}\n",
                    "Scores:".bold(),
                    prompt.score.clarity,
                    prompt.score.specificity,
                    prompt.score.structure,
                    prompt.score.completeness,
                    prompt.score.overall
                ));
                if !prompt.metadata.rules_applied.is_empty() {
                    output.push_str(&format!(
                        "{} {}\n",
                        "Rules:".bold(),
                        prompt.metadata.rules_applied.join(", ")
                    ));
                }
                output
            }
        }
    }

    fn score_table(before: &QualityScore, after: &QualityScore) -> String {
        let mut output = format!("  {:<13} {:>8} {:>8}\n", "", "before", "after");
        let rows = before
            .sub_scores()
            .dimensions()
            .into_iter()
            .zip(after.sub_scores().dimensions())
            .map(|((name, b), (_, a))| (name, b, a))
            .chain(std::iter::once(("overall", before.overall(), after.overall())));
        for (name, b, a) in rows {
            output.push_str(&format!("  {:<13} {:>8.2} {:>8.2}\n", name, b, a));
        }
        output
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn truncate(text: &str, max_chars: usize) -> String {
        let first_line = text.lines().next().unwrap_or_default();
        if first_line.chars().count() <= max_chars && first_line.len() == text.len() {
            return first_line.to_string();
        }
        let cut: String = first_line.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &RefinementReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &RefinementReport) -> String {
        Self::format_json(report)
    }

    fn format_refined_only(&self, report: &RefinementReport) -> String {
        Self::format_refined_only(report)
    }

    fn format_comparison(&self, result: &ComparisonResult, format: OutputFormat) -> String {
        Self::format_comparison(result, format)
    }
}
