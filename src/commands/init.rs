//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which creates a starter
//! `.addon-packer.yaml` configuration file.
//!
//! ## Functionality
//!
//! - **Starter Config**: Creates a commented configuration with the
//!   conventional pack layout and the well-known internal dependency UUIDs.
//! - **Force Mode**: Overwrites an existing configuration file when
//!   specified.

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use addon_packer::defaults;
use addon_packer::output::{emoji, OutputConfig};

/// Initialize a new .addon-packer.yaml configuration file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project root directory (defaults to current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Addon name used in the generated configuration
    #[arg(short, long, value_name = "NAME", default_value = "MyAddon")]
    pub name: String,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the `init` command.
///
/// Writes a starter configuration into the project root, refusing to
/// overwrite an existing one unless `--force` is given.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: InitArgs, color_flag: &str) -> Result<()> {
    let output = OutputConfig::from_flag(color_flag);
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config_path = root.join(defaults::CONFIG_FILE_NAME);

    // Check if config file already exists
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Configuration file '{}' already exists. Use --force to overwrite.",
            config_path.display()
        ));
    }

    fs::write(&config_path, starter_config(&args.name))?;
    println!(
        "{} Created {}",
        emoji(&output, "✅", "[OK]"),
        config_path.display()
    );
    println!(
        "{} Run `addon-packer build` to package the addon",
        emoji(&output, "💡", "[TIP]")
    );

    Ok(())
}

/// Generate the starter configuration with examples and comments.
fn starter_config(name: &str) -> String {
    format!(
        r#"# addon-packer configuration
# This file defines how the addon packs are packaged

name: {}
behavior-pack: behavior-pack
resource-pack: resource-pack

# Dependencies carrying these UUIDs are version-stamped alongside the
# packs. Script engine modules referenced by name are left untouched.
internal-uuids:
  - 43916969-950c-4573-b328-765089309601
  - 685c4909-66c3-4d45-930c-720498309602

# Dirty working trees produce +devN pre-release builds
dev-builds: true

# Uncomment to merge JSON gate definition fragments into a generated
# data module before packaging:
# definitions:
#   source: definitions
#   output: scripts/data/gate_definitions.js
#   export: GateDefinitions
"#,
        name
    )
}
