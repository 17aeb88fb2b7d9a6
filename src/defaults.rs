//! Default values for addon-packer configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Name of the build configuration file, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".addon-packer.yaml";

/// Name of the persisted dev-build counter file, kept in the project root.
///
/// The file holds a single integer that increments once per dirty-tree
/// build. It is expected to be gitignored.
pub const COUNTER_FILE_NAME: &str = ".dev_build_count";

/// File extension for the produced addon archives.
pub const ARCHIVE_EXTENSION: &str = "mcaddon";

/// Label used in place of the version for the stable-name archive copy.
pub const LATEST_LABEL: &str = "latest";
