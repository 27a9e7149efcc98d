//! Command-line interface for strictly_2048.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Strictly 2048 - slide tiles, merge pairs, reach 2048
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Play 2048 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// Print the stored best score
    Best(StoreArgs),

    /// Reset the stored best score to zero
    ClearBest(StoreArgs),
}

/// Overrides for a play session
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Seed for reproducible tile placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Location of the best-score file
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreArgs {
    /// Best-score JSON file (overrides the config file)
    #[arg(long)]
    pub best_score_path: Option<PathBuf>,
}

impl Cli {
    /// The command to run, with `play` as the default.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}
