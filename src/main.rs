//! Strictly 2048 - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_2048::{AppConfig, BestScore, Cli, Command, JsonFileStore, StoreArgs, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    match cli.resolved_command() {
        Command::Play(args) => {
            let mut config = config;
            if let Some(size) = args.size {
                config = config.with_board_size(size);
            }
            if let Some(seed) = args.seed {
                config = config.with_seed(Some(seed));
            }
            let config = apply_store_args(config, &args.store);
            config.validate()?;
            init_file_tracing(config.log_file())?;
            run_tui(&config)
        }
        Command::Best(args) => {
            init_stderr_tracing();
            print_best(&apply_store_args(config, &args))
        }
        Command::ClearBest(args) => {
            init_stderr_tracing();
            clear_best(&apply_store_args(config, &args))
        }
    }
}

fn apply_store_args(config: AppConfig, args: &StoreArgs) -> AppConfig {
    match &args.best_score_path {
        Some(path) => config.with_best_score_path(path.clone()),
        None => config,
    }
}

/// Print the stored best score
#[instrument(skip_all, fields(path = %config.best_score_path().display()))]
fn print_best(config: &AppConfig) -> Result<()> {
    let best = BestScore::new(JsonFileStore::new(config.best_score_path()));
    let value = best.best().context("Failed to read best score")?;
    println!("{}", value);
    Ok(())
}

/// Reset the stored best score
#[instrument(skip_all, fields(path = %config.best_score_path().display()))]
fn clear_best(config: &AppConfig) -> Result<()> {
    let mut best = BestScore::new(JsonFileStore::new(config.best_score_path()));
    best.clear().context("Failed to clear best score")?;
    info!("Best score cleared");
    println!("Best score reset to 0");
    Ok(())
}

/// Log to a file so output never lands on the terminal UI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
