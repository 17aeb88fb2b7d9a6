//! Orchestrator for the complete build operation
//!
//! This module coordinates the build stages to provide a clean API for
//! producing an addon archive from a configured project.

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::{self, EntryTransform, StageSummary};
use crate::config::BuildConfig;
use crate::counter::CounterStore;
use crate::defaults;
use crate::definitions;
use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;
use crate::git::GitOperations;
use crate::manifest;
use crate::version::{self, ResolvedVersion};

/// Results of a completed build
#[derive(Debug)]
pub struct BuildOutcome {
    /// The version the packs were stamped with.
    pub version: ResolvedVersion,
    /// Path of the versioned archive.
    pub archive_path: PathBuf,
    /// Path of the stable-name copy.
    pub latest_path: PathBuf,
    /// Number of files staged into the archive.
    pub files_archived: usize,
    /// Number of manifests rewritten while staging.
    pub manifests_patched: usize,
    /// Number of manifests carried raw after a patch failure.
    pub patch_fallbacks: usize,
    /// Number of gate definitions merged, when that stage is configured.
    pub definitions_merged: Option<usize>,
}

/// Execute the complete build operation
///
/// This orchestrates the build pipeline:
/// 1. Ensure the generated-data directory exists
/// 2. Resolve the build version from repository state
/// 3. Merge gate definition fragments into the data module (if configured)
/// 4. Stage both packs, patching manifests on the way in
/// 5. Write the versioned archive and refresh the `_latest` copy
pub fn execute_build(
    config: &BuildConfig,
    root: &Path,
    git: &dyn GitOperations,
    counter: &mut dyn CounterStore,
) -> Result<BuildOutcome> {
    let behavior_pack = root.join(&config.behavior_pack);

    // Stage 1: Generated-data directory
    let data_dir = behavior_pack.join(&config.data_dir);
    fs::create_dir_all(&data_dir).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to create data directory '{}': {}",
            data_dir.display(),
            e
        ),
    })?;

    // Stage 2: Version resolution
    let base = version::base_version(&behavior_pack.join(manifest::MANIFEST_FILE_NAME));
    let resolved = version::resolve(git, counter, base, config.dev_builds)?;

    // Stage 3: Gate definition merging
    let definitions_merged = match &config.definitions {
        Some(definitions_config) => {
            let merged = definitions::merge_definitions(&root.join(&definitions_config.source))?;
            let output = behavior_pack.join(&definitions_config.output);
            definitions::write_module(&output, &definitions_config.export, &merged)?;
            Some(merged.len())
        }
        None => None,
    };

    // Stage 4: Staging with manifest patching
    let (staged, summary) = stage(config, root, &resolved)?;

    // Stage 5: Archive writing and latest copy
    let archive_path = root.join(archive_file_name(&config.name, &resolved));
    archive::write_archive(&staged, &archive_path)?;

    let latest_path = root.join(latest_file_name(&config.name));
    fs::copy(&archive_path, &latest_path).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to copy archive to '{}': {}",
            latest_path.display(),
            e
        ),
    })?;

    Ok(BuildOutcome {
        version: resolved,
        archive_path,
        latest_path,
        files_archived: staged.len(),
        manifests_patched: summary.transformed,
        patch_fallbacks: summary.fallbacks,
        definitions_merged,
    })
}

/// Builds the versioned archive file name (`Stargate_v1.1.43+dev0.mcaddon`).
pub fn archive_file_name(name: &str, version: &ResolvedVersion) -> String {
    format!("{}_{}.{}", name, version, defaults::ARCHIVE_EXTENSION)
}

/// Builds the stable archive file name (`Stargate_latest.mcaddon`).
pub fn latest_file_name(name: &str) -> String {
    format!(
        "{}_{}.{}",
        name,
        defaults::LATEST_LABEL,
        defaults::ARCHIVE_EXTENSION
    )
}

fn stage(
    config: &BuildConfig,
    root: &Path,
    version: &ResolvedVersion,
) -> Result<(MemoryFS, StageSummary)> {
    let manifest_transform = {
        let version = version.clone();
        let internal_uuids = config.internal_uuids.clone();
        EntryTransform::new(manifest::MANIFEST_FILE_NAME, move |raw| {
            manifest::patch_bytes(raw, &version, &internal_uuids)
        })?
    };

    let packs = [config.behavior_pack.clone(), config.resource_pack.clone()];
    archive::stage_packs(root, &packs, &[manifest_transform])
}
