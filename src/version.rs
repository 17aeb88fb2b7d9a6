//! # Version Resolution
//!
//! This module derives the addon version for a build from the state of
//! the local Git repository.
//!
//! ## Process
//!
//! 1.  **Base Version**: The major and minor components come from the
//!     behavior pack manifest (`header.version`). Only the patch
//!     component is generated.
//!
//! 2.  **Commit Count**: The patch component starts from the number of
//!     commits reachable from `HEAD`, so every commit on the branch
//!     yields a distinct release version.
//!
//! 3.  **Dev Builds**: When the working tree is dirty, the persisted
//!     dev-build counter is incremented and added to the patch
//!     component, and the version gains a `+devN` build suffix. Two dev
//!     builds from the same commit therefore never collide, and a dev
//!     build always sorts above the release build of its commit.
//!
//! Git queries degrade gracefully: a missing repository or git binary
//! logs a warning and falls back to a commit count of zero and a clean
//! tree, so the build still produces an archive.

use std::fmt;
use std::path::Path;

use log::warn;
use semver::{BuildMetadata, Version};
use serde_json::Value;

use crate::counter::CounterStore;
use crate::error::{Error, Result};
use crate::git::GitOperations;

/// A fully resolved addon version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Major component, taken from the pack manifest.
    pub major: u64,
    /// Minor component, taken from the pack manifest.
    pub minor: u64,
    /// Generated patch component.
    pub patch: u64,
    /// Dev-build number, present only for dirty-tree builds.
    ///
    /// This is the counter value before the build's increment, so the
    /// first dev build on top of a commit is `+dev0`.
    pub dev: Option<u64>,
}

impl ResolvedVersion {
    /// Renders the version as semver, with the dev number carried as
    /// build metadata (`1.1.43+dev0`).
    pub fn semver(&self) -> Version {
        let mut version = Version::new(self.major, self.minor, self.patch);
        if let Some(n) = self.dev {
            version.build =
                BuildMetadata::new(&format!("dev{}", n)).expect("devN is valid build metadata");
        }
        version
    }
}

/// Displays as `v1.1.43+dev0`, the form used in archive names and
/// manifest name suffixes.
impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.semver())
    }
}

/// Computes the version a build would get right now, without consuming a
/// dev-build counter increment.
pub fn preview(
    git: &dyn GitOperations,
    counter: &dyn CounterStore,
    base: (u64, u64),
    dev_builds: bool,
) -> Result<ResolvedVersion> {
    let (count, dirty) = query_repository(git);
    let (major, minor) = base;

    if !dev_builds || !dirty {
        return Ok(ResolvedVersion {
            major,
            minor,
            patch: count,
            dev: None,
        });
    }

    let increment = counter.load()? + 1;

    Ok(ResolvedVersion {
        major,
        minor,
        patch: count + increment,
        dev: Some(increment - 1),
    })
}

/// Resolves the version for a build.
///
/// Identical to [`preview`] except that a dirty-tree resolution persists
/// the consumed counter increment.
pub fn resolve(
    git: &dyn GitOperations,
    counter: &mut dyn CounterStore,
    base: (u64, u64),
    dev_builds: bool,
) -> Result<ResolvedVersion> {
    let version = preview(git, &*counter, base, dev_builds)?;
    if let Some(dev) = version.dev {
        counter.store(dev + 1)?;
    }
    Ok(version)
}

/// Reads the base major and minor version from a pack manifest.
///
/// Failures fall back to `0.0` with a warning rather than aborting,
/// since a readable manifest is not required to produce an archive.
pub fn base_version(manifest_path: &Path) -> (u64, u64) {
    match read_base_version(manifest_path) {
        Ok(base) => base,
        Err(e) => {
            warn!(
                "Could not read base version from {}, defaulting to 0.0: {}",
                manifest_path.display(),
                e
            );
            (0, 0)
        }
    }
}

fn query_repository(git: &dyn GitOperations) -> (u64, bool) {
    let count = match git.commit_count() {
        Ok(count) => count,
        Err(e) => {
            warn!("Could not determine commit count, defaulting to 0: {}", e);
            0
        }
    };

    let dirty = match git.is_dirty() {
        Ok(dirty) => dirty,
        Err(e) => {
            warn!("Could not determine working tree state, assuming clean: {}", e);
            false
        }
    };

    (count, dirty)
}

fn read_base_version(path: &Path) -> Result<(u64, u64)> {
    let content = std::fs::read(path)?;
    let manifest: Value = serde_json::from_slice(&content)?;

    let slots = manifest
        .get("header")
        .and_then(|header| header.get("version"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Manifest {
            section: "header".to_string(),
            message: "version missing or not an array".to_string(),
        })?;

    Ok((version_slot(slots, 0)?, version_slot(slots, 1)?))
}

fn version_slot(slots: &[Value], index: usize) -> Result<u64> {
    slots
        .get(index)
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::Manifest {
            section: "header".to_string(),
            message: format!("version[{}] is not an unsigned integer", index),
        })
}
