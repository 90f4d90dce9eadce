mod cli;
mod scenario;

use std::process::ExitCode;

use easel_common::EaselError;
use easel_config::EaselConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "easel=info";

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive '{directive}', using {DEFAULT_DIRECTIVE}");
        DEFAULT_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| Directive::from(LevelFilter::INFO))
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &cli::Args) -> Result<EaselConfig, EaselError> {
    let config = match &args.config {
        Some(path) => easel_config::load_config_from(path)?,
        None => easel_config::load_config()?,
    };
    Ok(config)
}

fn run(args: &cli::Args, config: &EaselConfig) -> Result<(), EaselError> {
    if args.print_config {
        println!("{}", easel_config::config_to_json(config));
        return Ok(());
    }

    let Some(path) = &args.scenario else {
        return Ok(());
    };
    let scenario = scenario::load_scenario(path)?;
    let reports = scenario::run(&scenario, config)?;
    let json = serde_json::to_string_pretty(&reports)
        .map_err(|e| EaselError::Other(format!("failed to serialize reports: {e}")))?;
    println!("{json}");
    tracing::info!(steps = reports.len(), "scenario complete");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the filter.
    let loaded = load_config(&args);
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    let directive = args
        .log_level
        .as_deref()
        .map(|level| format!("easel={level}"))
        .unwrap_or_else(|| config_level.directive().to_string());
    init_logging(&directive);

    tracing::info!("Easel v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        EaselConfig::default()
    });

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
