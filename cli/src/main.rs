//! CLI entrypoint for Prompt Refinery
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use refinery_application::{
    ComparePromptsInput, ComparePromptsUseCase, NoRefinementLogger, PromptHistoryUseCase,
    PromptStore, RefinePromptInput, RefinePromptUseCase, RefinementLogger, SearchCriteria,
};
use refinery_domain::{ConfigIssue, DomainRegistry, HeuristicEvaluator, PromptEvaluator, Severity};
use refinery_infrastructure::{
    ConfigLoader, FileConfig, JsonFilePromptStore, JsonlRefinementLogger, KeywordAnalyzer,
    StructuralValidator,
};
use refinery_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, OutputFormatter, resolve_domain,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match (cli.verbose, cli.quiet) {
        (0, true) => EnvFilter::new("error"),
        (0, false) => EnvFilter::new("warn"),
        (1, _) => EnvFilter::new("info"),
        (2, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting Prompt Refinery");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
        cli.quiet,
    );
    output.apply();

    // === Dependency Injection ===
    let registry = Arc::new(build_registry(&config)?);
    let evaluator: Arc<dyn PromptEvaluator> = Arc::new(HeuristicEvaluator::new());
    let logger = build_logger(&config);
    let options = config.refine.to_options();
    let formatter = ConsoleFormatter;

    let rendered = match command {
        Command::Refine(args) => {
            let save = args.save || options.save;
            let mut use_case = RefinePromptUseCase::new(registry.clone(), evaluator.clone())
                .with_logger(logger.clone());
            if options.analyze {
                use_case = use_case.with_analyzer(Arc::new(KeywordAnalyzer::new()?));
            }
            if options.validate {
                use_case = use_case.with_validator(Arc::new(StructuralValidator::new()?));
            }
            if save {
                match open_store(&config).await? {
                    Some(store) => use_case = use_case.with_store(store),
                    None => warn!("No store path available; the refinement will not be saved"),
                }
            }

            let domain = args.requested_domain();
            let mut input = RefinePromptInput::new(args.prompt).with_save(save);
            if let Some(domain) = domain {
                input = input.with_domain(domain);
            }
            if let Some(context) = args.context {
                input = input.with_context(context);
            }

            let report = use_case.execute(input).await?;
            formatter.render(&report, output.format)
        }
        Command::Compare(args) => {
            let mut input = ComparePromptsInput::new(args.variants);
            if let Some(test_input) = args.input {
                input = input.with_test_input(test_input);
            }
            let result = ComparePromptsUseCase::new(registry.clone(), evaluator.clone())
                .with_logger(logger.clone())
                .execute(input)?;
            formatter.format_comparison(&result, output.format)
        }
        Command::Detect { prompt } => {
            let analysis = if options.analyze {
                Some(KeywordAnalyzer::new()?.analyze_text(&prompt))
            } else {
                None
            };
            let detection = registry.detect_domain_scored(&prompt, analysis.as_ref());
            ConsoleFormatter::format_detection(&detection, output.format)
        }
        Command::SystemPrompt { domain, context } => {
            let domain = resolve_domain(&domain);
            let prompt = registry.generate_system_prompt(domain, None, context.as_deref());
            ConsoleFormatter::format_system_prompt(domain, &prompt, output.format)
        }
        Command::Weights { domain } => {
            let domain = resolve_domain(&domain);
            let weights = registry.get_quality_weights(domain);
            ConsoleFormatter::format_weights(domain, &weights, output.format)
        }
        Command::Domains => ConsoleFormatter::format_domains(&registry, output.format),
        Command::History(args) => {
            let history = PromptHistoryUseCase::new(require_store(&config).await?);
            let mut criteria = SearchCriteria::new().with_limit(args.limit);
            if let Some(domain) = args.requested_domain() {
                criteria = criteria.with_domain(domain);
            }
            if let Some(text) = args.text {
                criteria = criteria.with_text(text);
            }
            if let Some(min_score) = args.min_score {
                criteria = criteria.with_min_score(min_score);
            }
            let prompts = history.search(&criteria).await?;
            ConsoleFormatter::format_history(&prompts, output.format)
        }
        Command::Show { id } => {
            let history = PromptHistoryUseCase::new(require_store(&config).await?);
            let prompt = history.get(&id).await?;
            ConsoleFormatter::format_stored(&prompt, output.format)
        }
    };

    println!("{}", rendered.trim_end());

    Ok(())
}

/// Log warnings and abort on configuration errors
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }
    if ConfigIssue::has_errors(&issues) {
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        bail!("invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Built-in domains with configured weight overrides applied
fn build_registry(config: &FileConfig) -> Result<DomainRegistry> {
    let mut registry = DomainRegistry::with_builtin_domains()?;
    for (domain, weights) in config.weight_overrides() {
        registry.set_quality_weights(domain, weights)?;
        info!("Using configured quality weights for {}", domain);
    }
    Ok(registry)
}

fn build_logger(config: &FileConfig) -> Arc<dyn RefinementLogger> {
    config
        .logging
        .events_file
        .as_deref()
        .and_then(JsonlRefinementLogger::new)
        .map(|logger| Arc::new(logger) as Arc<dyn RefinementLogger>)
        .unwrap_or_else(|| Arc::new(NoRefinementLogger))
}

async fn open_store(config: &FileConfig) -> Result<Option<Arc<dyn PromptStore>>> {
    let Some(path) = config.store.resolved_path() else {
        return Ok(None);
    };
    let store = JsonFilePromptStore::open(&path)
        .await
        .with_context(|| format!("failed to open prompt store {}", path.display()))?;
    Ok(Some(Arc::new(store)))
}

async fn require_store(config: &FileConfig) -> Result<Arc<dyn PromptStore>> {
    match open_store(config).await? {
        Some(store) => Ok(store),
        None => bail!("no prompt store configured; set [store] path in the config file"),
    }
}
