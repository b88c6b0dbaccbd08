//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use refinery_domain::Domain;
use std::path::PathBuf;

/// Output format for refinement results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with scores, rules and system prompt
    Full,
    /// Only the refined prompt
    Refined,
    /// JSON output
    Json,
}

impl From<OutputFormat> for refinery_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => refinery_domain::OutputFormat::Full,
            OutputFormat::Refined => refinery_domain::OutputFormat::Refined,
            OutputFormat::Json => refinery_domain::OutputFormat::Json,
        }
    }
}

/// Resolve a requested domain name. Unknown names fall back to `general`.
pub fn resolve_domain(name: &str) -> Domain {
    Domain::parse_or_general(name)
}

/// CLI arguments for prompt-refinery
#[derive(Parser, Debug)]
#[command(name = "prompt-refinery")]
#[command(author, version, about = "Domain-aware prompt refinement and quality scoring")]
#[command(long_about = r#"
Prompt Refinery rewrites rough prompts into professional, domain-appropriate ones.

Each prompt is assigned a domain (sql, branding, cine, saas, devops or general),
run through that domain's rule pipeline, and scored on clarity, specificity,
structure and completeness before and after refinement.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./refinery.toml       Project-level config
3. ~/.config/prompt-refinery/config.toml   Global config

Example:
  prompt-refinery refine "hazme una bonita tabla para usuarios"
  prompt-refinery refine --domain devops "set up a fast deploy for the server"
  prompt-refinery compare "Short prompt" "A detailed prompt with constraints"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the config file, then `full`)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress everything but the result
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Refine a prompt
    Refine(RefineArgs),

    /// Compare two or more prompt variants
    Compare(CompareArgs),

    /// Show which domain a prompt is detected as
    Detect {
        /// The prompt to classify
        prompt: String,
    },

    /// Print the system prompt for a domain
    SystemPrompt {
        /// Domain name (unknown names use `general`)
        domain: String,

        /// Extra context appended to the system prompt
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Show the quality weights of a domain
    Weights {
        /// Domain name (unknown names use `general`)
        domain: String,
    },

    /// List the registered domains
    Domains,

    /// Search saved refinements
    History(HistoryArgs),

    /// Show one saved refinement
    Show {
        /// Id of the saved prompt (e.g. prm-3)
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct RefineArgs {
    /// The prompt to refine
    pub prompt: String,

    /// Use this domain instead of detecting one (unknown names use `general`)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Extra context appended to the system prompt
    #[arg(short, long)]
    pub context: Option<String>,

    /// Save the refinement to the prompt store
    #[arg(long)]
    pub save: bool,
}

impl RefineArgs {
    /// Explicit domain, if one was requested
    pub fn requested_domain(&self) -> Option<Domain> {
        self.domain.as_deref().map(resolve_domain)
    }
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Prompt variants (at least two)
    #[arg(required = true, num_args = 1..)]
    pub variants: Vec<String>,

    /// Value substituted for `{input}` / `{{input}}` in every variant
    #[arg(short, long, value_name = "TEXT")]
    pub input: Option<String>,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Only prompts in this domain
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Case-insensitive text to look for
    #[arg(short, long)]
    pub text: Option<String>,

    /// Minimum overall score (0.0 to 1.0)
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

impl HistoryArgs {
    pub fn requested_domain(&self) -> Option<Domain> {
        self.domain.as_deref().map(resolve_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_refine_args() {
        let cli = Cli::try_parse_from([
            "prompt-refinery",
            "-o",
            "json",
            "refine",
            "--domain",
            "sql",
            "--save",
            "hazme una tabla",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Refine(args)) => {
                assert_eq!(args.prompt, "hazme una tabla");
                assert_eq!(args.requested_domain(), Some(Domain::Sql));
                assert!(args.save);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_domain_falls_back_to_general() {
        let cli =
            Cli::try_parse_from(["prompt-refinery", "refine", "--domain", "astrology", "hi"])
                .unwrap();
        match cli.command {
            Some(Command::Refine(args)) => {
                assert_eq!(args.domain.as_deref(), Some("astrology"));
                assert_eq!(args.requested_domain(), Some(Domain::General));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["prompt-refinery", "weights", "poetry"]).unwrap();
        match cli.command {
            Some(Command::Weights { domain }) => {
                assert_eq!(resolve_domain(&domain), Domain::General);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["prompt-refinery", "domains", "-vv", "--no-config"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
        assert!(matches!(cli.command, Some(Command::Domains)));
    }

    #[test]
    fn test_compare_collects_variants() {
        let cli = Cli::try_parse_from([
            "prompt-refinery",
            "compare",
            "Translate {input}",
            "Summarize {input}",
            "--input",
            "the report",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Compare(args)) => {
                assert_eq!(args.variants.len(), 2);
                assert_eq!(args.input.as_deref(), Some("the report"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_defaults() {
        let cli =
            Cli::try_parse_from(["prompt-refinery", "history", "--min-score", "0.5"]).unwrap();
        match cli.command {
            Some(Command::History(args)) => {
                assert_eq!(args.limit, 20);
                assert_eq!(args.min_score, Some(0.5));
                assert!(args.requested_domain().is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
