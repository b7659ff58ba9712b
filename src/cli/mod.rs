//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Tabscrub using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Tabscrub - CSV anonymization and test data tool
#[derive(Parser, Debug)]
#[command(name = "tabscrub")]
#[command(version, about, long_about = None)]
#[command(author = "Tabscrub Contributors")]
pub struct Cli {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "tabscrub.toml", env = "TABSCRUB_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TABSCRUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash the identifier column and mask the phone column of a CSV file
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Generate a synthetic test dataset
    Generate(commands::generate::GenerateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Execute the selected command, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Anonymize(args) => args.execute(&self.config),
            Commands::Generate(args) => args.execute(&self.config),
            Commands::ValidateConfig(args) => args.execute(&self.config),
            Commands::Init(args) => args.execute(),
        }
    }
}
