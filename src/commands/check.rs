//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which validates the
//! `.addon-packer.yaml` configuration file and previews the version the
//! next build would get.
//!
//! ## Functionality
//!
//! - **Configuration Validation**: Parses the configuration file and
//!   reports a summary of the loaded settings: pack directories, internal
//!   dependency UUIDs and the definition merge stage.
//!
//! - **Version Preview**: Resolves the version exactly the way a build
//!   would, but without consuming a dev-build counter increment, so the
//!   previewed version matches what `build` will stamp next.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use addon_packer::output::{emoji, OutputConfig};

/// Validate the configuration and preview the next build version
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "ADDON_PACKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

/// Execute the `check` command.
///
/// Loads and validates the configuration, then previews the next build
/// version from the current repository state. The dev-build counter is
/// read but never written.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    use addon_packer::config;
    use addon_packer::counter::FileCounterStore;
    use addon_packer::defaults;
    use addon_packer::git::DefaultGitOperations;
    use addon_packer::manifest;
    use addon_packer::pipeline;
    use addon_packer::version;

    let output = OutputConfig::from_flag(color_flag);

    // Determine project root
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    // Determine config file path
    let config_path = args
        .config
        .unwrap_or_else(|| root.join(defaults::CONFIG_FILE_NAME));

    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    println!("Loading configuration from: {}", config_path.display());
    let config = config::from_file(&config_path).map_err(|e| {
        anyhow::anyhow!("Failed to load config from {}: {}", config_path.display(), e)
    })?;

    println!(
        "{} Configuration loaded successfully",
        emoji(&output, "✅", "[OK]")
    );
    println!("   Name: {}", config.name);
    println!("   Behavior pack: {}", config.behavior_pack);
    println!("   Resource pack: {}", config.resource_pack);
    println!("   Internal UUIDs: {}", config.internal_uuids.len());
    match &config.definitions {
        Some(definitions) => println!(
            "   Definitions: {} -> {} (export {})",
            definitions.source, definitions.output, definitions.export
        ),
        None => println!("   Definitions: disabled"),
    }

    // Preview the next version without consuming a counter increment
    let behavior_pack = root.join(&config.behavior_pack);
    let base = version::base_version(&behavior_pack.join(manifest::MANIFEST_FILE_NAME));
    let git = DefaultGitOperations::new(&root);
    let counter = FileCounterStore::in_dir(&root);
    let preview = version::preview(&git, &counter, base, config.dev_builds)?;

    println!();
    println!(
        "{} Next build version: {}",
        emoji(&output, "🔖", "[VERSION]"),
        preview
    );
    println!(
        "   Archive: {}",
        pipeline::archive_file_name(&config.name, &preview)
    );

    println!();
    println!(
        "{} Tip: Run `addon-packer build` to produce the archive",
        emoji(&output, "💡", "[TIP]")
    );

    Ok(())
}
