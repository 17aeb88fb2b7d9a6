//! Build command implementation
//!
//! The build command executes the full packaging pipeline:
//! 1. Ensure the generated-data directory exists
//! 2. Resolve the build version from repository state
//! 3. Merge gate definition fragments into the data module (if configured)
//! 4. Stage both packs, patching manifests on the way in
//! 5. Write the versioned archive and refresh the `_latest` copy

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use addon_packer::output::{emoji, OutputConfig};

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "ADDON_PACKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: BuildArgs, color_flag: &str) -> Result<()> {
    use addon_packer::config;
    use addon_packer::counter::FileCounterStore;
    use addon_packer::defaults;
    use addon_packer::git::DefaultGitOperations;
    use addon_packer::pipeline;
    use std::time::Instant;

    let output = OutputConfig::from_flag(color_flag);
    let start_time = Instant::now();

    // Determine project root
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    // Determine config file path
    let config_path = args
        .config
        .unwrap_or_else(|| root.join(defaults::CONFIG_FILE_NAME));

    // Validate config file exists
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    // Print header
    if !args.quiet {
        println!("{} Addon Packer Build", emoji(&output, "📦", "[PACK]"));
        println!();
    }

    // Parse configuration
    if !args.quiet && args.verbose {
        println!("Parsing configuration: {}", config_path.display());
    }
    let config = config::from_file(&config_path)?;

    // Execute the 5-stage pipeline against the real repository state
    let git = DefaultGitOperations::new(&root);
    let mut counter = FileCounterStore::in_dir(&root);
    let result = pipeline::execute_build(&config, &root, &git, &mut counter);

    match result {
        Ok(outcome) => {
            let duration = start_time.elapsed();

            if !args.quiet {
                println!(
                    "{} Version {}",
                    emoji(&output, "🔖", "[VERSION]"),
                    outcome.version
                );
                if let Some(count) = outcome.definitions_merged {
                    println!(
                        "{} {} gate definitions merged",
                        emoji(&output, "🧩", "[MERGE]"),
                        count
                    );
                }
                println!(
                    "{} Packed {} files in {:.2}s",
                    emoji(&output, "✅", "[OK]"),
                    outcome.files_archived,
                    duration.as_secs_f64()
                );

                // Report statistics
                println!("   {} manifests patched", outcome.manifests_patched);
                if outcome.patch_fallbacks > 0 {
                    println!(
                        "   {} manifests carried raw after patch failures",
                        outcome.patch_fallbacks
                    );
                }
                println!("   Archive: {}", outcome.archive_path.display());
                println!("   Latest:  {}", outcome.latest_path.display());
            }

            Ok(())
        }
        Err(e) => {
            if !args.quiet {
                println!("{} Build failed", emoji(&output, "❌", "[FAILED]"));
                println!();
            }
            Err(e.into())
        }
    }
}
