//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the
//! `.addon-packer.yaml` configuration file, as well as the logic for
//! parsing and validating it.
//!
//! ## Key Components
//!
//! - **`BuildConfig`**: The top-level configuration: the addon name, the
//!   two pack directories, and the knobs for dev-build versioning and
//!   manifest patching.
//!
//! - **`DefinitionsConfig`**: Optional configuration for the gate
//!   definition merge stage, which concatenates JSON fragment files into
//!   a generated data module inside the behavior pack.
//!
//! ## Parsing
//!
//! The `parse` function is the main entry point for parsing a YAML string
//! into a `BuildConfig`. Required fields are limited to the addon name and
//! the two pack directories; everything else has a sensible default so a
//! minimal configuration stays three lines long.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Gate definition merge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionsConfig {
    /// Directory containing JSON fragment files, relative to the project
    /// root.
    pub source: String,
    /// Path of the generated data module, relative to the behavior pack.
    #[serde(default = "default_definitions_output")]
    pub output: String,
    /// Name of the exported constant in the generated module.
    #[serde(default = "default_definitions_export")]
    pub export: String,
}

/// The complete build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Addon name, used as the archive filename prefix.
    pub name: String,
    /// Behavior pack directory, relative to the project root.
    #[serde(rename = "behavior-pack")]
    pub behavior_pack: String,
    /// Resource pack directory, relative to the project root.
    #[serde(rename = "resource-pack")]
    pub resource_pack: String,
    /// Directory for generated data modules, relative to the behavior
    /// pack. Created before the build runs if absent.
    #[serde(default = "default_data_dir", rename = "data-dir")]
    pub data_dir: String,
    /// Whether dirty working trees produce `+devN` suffixed builds.
    ///
    /// When disabled, the version is derived strictly from the commit
    /// count and the dev-build counter is never touched.
    #[serde(default = "default_dev_builds", rename = "dev-builds")]
    pub dev_builds: bool,
    /// Dependency UUIDs that are version-patched along with the packs.
    ///
    /// Dependency entries whose uuid is not listed here (script engine
    /// modules, server APIs) are left untouched.
    #[serde(default, rename = "internal-uuids")]
    pub internal_uuids: Vec<String>,
    /// Optional gate definition merge stage.
    #[serde(default)]
    pub definitions: Option<DefinitionsConfig>,
}

/// Default directory for generated data modules, relative to the
/// behavior pack.
///
/// # Examples
///
/// ```
/// use addon_packer::config::default_data_dir;
///
/// assert_eq!(default_data_dir(), "scripts/data");
/// ```
pub fn default_data_dir() -> String {
    "scripts/data".to_string()
}

fn default_dev_builds() -> bool {
    true
}

fn default_definitions_output() -> String {
    "scripts/data/gate_definitions.js".to_string()
}

fn default_definitions_export() -> String {
    "GateDefinitions".to_string()
}

/// Parses a YAML string into a `BuildConfig`.
///
/// Parse failures carry a hint naming the required fields, since the most
/// common failure is a missing key.
pub fn parse(yaml_content: &str) -> Result<BuildConfig> {
    let config: BuildConfig =
        serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
            hint: missing_field_hint(&e.to_string()),
        })?;
    validate(&config)?;
    Ok(config)
}

/// Parses a `BuildConfig` from a YAML file path.
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<BuildConfig> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

fn missing_field_hint(message: &str) -> Option<String> {
    if message.contains("missing field") {
        Some("a minimal configuration needs: name, behavior-pack, resource-pack".to_string())
    } else {
        None
    }
}

fn validate(config: &BuildConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: "name must not be empty".to_string(),
            hint: None,
        });
    }
    if config.behavior_pack.trim().is_empty() || config.resource_pack.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: "behavior-pack and resource-pack must not be empty".to_string(),
            hint: None,
        });
    }
    Ok(())
}
