//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::commands;

/// Addon Packer - Package Bedrock addon packs into versioned archives
#[derive(Parser, Debug)]
#[command(name = "addon-packer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Package both packs into a versioned .mcaddon archive
    Build(commands::build::BuildArgs),
    /// Validate the configuration and preview the next build version
    Check(commands::check::CheckArgs),
    /// Initialize a new .addon-packer.yaml configuration
    Init(commands::init::InitArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(Env::default().default_filter_or(&self.log_level))
            .format_timestamp(None)
            .init();

        match self.command {
            Commands::Build(args) => commands::build::execute(args, &self.color),
            Commands::Check(args) => commands::check::execute(args, &self.color),
            Commands::Init(args) => commands::init::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
