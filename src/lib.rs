//! # Addon Packer Library
//!
//! This library provides the core functionality for packaging Bedrock
//! addon packs into versioned `.mcaddon` archives. It is designed to be
//! used by the `addon-packer` command-line tool but can also be integrated
//! into other applications that need manifest patching or archive
//! building.
//!
//! ## Quick Example
//!
//! ```
//! use addon_packer::manifest;
//! use addon_packer::version::ResolvedVersion;
//! use serde_json::json;
//!
//! let mut manifest = json!({
//!     "header": {
//!         "name": "Stargate v1.1.7",
//!         "uuid": "43916969-950c-4573-b328-765089309601",
//!         "version": [1, 1, 7]
//!     },
//!     "modules": [
//!         { "type": "data", "version": [1, 1, 7] }
//!     ]
//! });
//!
//! let version = ResolvedVersion {
//!     major: 1,
//!     minor: 1,
//!     patch: 42,
//!     dev: None,
//! };
//! let internal = vec!["43916969-950c-4573-b328-765089309601".to_string()];
//! manifest::patch_manifest(&mut manifest, &version, &internal).unwrap();
//!
//! assert_eq!(manifest["header"]["version"][2], 42);
//! assert_eq!(manifest["header"]["name"], "Stargate v1.1.42");
//! assert_eq!(manifest["modules"][0]["version"][2], 42);
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Configuration (`config`)**: Defines the schema for `.addon-packer.yaml`
//!   files: the addon name, the pack directories, and the knobs for
//!   dev-build versioning, manifest patching, and definition merging.
//! - **Version Resolution (`version`, `git`, `counter`)**: Derives the patch
//!   number from the repository commit count, numbering dirty working trees
//!   as `+devN` pre-releases through a persisted counter.
//! - **Manifest Patching (`manifest`)**: Pure, idempotent rewriting of pack
//!   manifests so headers, modules, and internal dependencies all carry the
//!   resolved version.
//! - **Definition Merging (`definitions`)**: Concatenates JSON gate
//!   definition fragments into a generated JavaScript data module.
//! - **Staging and Archiving (`filesystem`, `archive`)**: An in-memory
//!   filesystem used to stage pack files (with manifests patched on the way
//!   in) before writing them out as a deflate-compressed archive.
//!
//! ## Execution Flow
//!
//! The main entry point is `pipeline::execute_build`, which executes the
//! following high-level steps:
//!
//! 1.  **Data Directory**: Ensure the generated-data directory exists.
//! 2.  **Version Resolution**: Read the base version from the behavior pack
//!     manifest and resolve the full version from repository state.
//! 3.  **Definition Merging**: Merge gate definition fragments into the
//!     data module, when configured.
//! 4.  **Staging**: Walk both pack trees into an in-memory filesystem,
//!     patching every manifest on the way in.
//! 5.  **Archive Writing**: Write the versioned archive and refresh the
//!     stable `_latest` copy.
//!
//! By separating the logic into these distinct modules, the library keeps
//! every stage independently testable against in-memory fakes.

pub mod archive;
pub mod config;
pub mod counter;
pub mod defaults;
pub mod definitions;
pub mod error;
pub mod filesystem;
pub mod git;
pub mod json;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod version;

#[cfg(test)]
mod manifest_proptest;
