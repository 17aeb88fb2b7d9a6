//! # Archive Assembly
//!
//! This module turns the pack directories into a distributable addon
//! archive. Assembly happens in two steps:
//!
//! 1.  **Staging**: every file under the pack directories is read into
//!     an in-memory filesystem, keyed by its path relative to the
//!     project root so the pack directory names become the top-level
//!     archive entries. Files matching a registered transform are
//!     rewritten on the way in; a failing transform logs a warning and
//!     stages the raw bytes instead, degrading that one file rather than
//!     the whole build.
//!
//! 2.  **Writing**: the staged files are written to a deflate-compressed
//!     zip in sorted path order, carrying their unix permission bits.
//!
//! Transforms are keyed by file name pattern rather than hard-coded, so
//! additional patched file types only need a new registration.

use std::fs;
use std::io::Write;
use std::path::Path;

use glob::Pattern;
use log::warn;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::filesystem::{File, MemoryFS};

/// A content rewrite applied to matching files as they are staged.
pub struct EntryTransform {
    pattern: Pattern,
    transform: Box<dyn Fn(&[u8]) -> Result<Vec<u8>>>,
}

impl EntryTransform {
    /// Creates a transform applied to files whose name matches the glob
    /// pattern.
    pub fn new<F>(pattern: &str, transform: F) -> Result<Self>
    where
        F: Fn(&[u8]) -> Result<Vec<u8>> + 'static,
    {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
            transform: Box::new(transform),
        })
    }

    fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
    }

    fn apply(&self, raw: &[u8]) -> Result<Vec<u8>> {
        (self.transform)(raw)
    }
}

/// Counters reported from staging
#[derive(Debug, Default, Clone, Copy)]
pub struct StageSummary {
    /// Files rewritten by a transform.
    pub transformed: usize,
    /// Files staged raw after a transform failure.
    pub fallbacks: usize,
}

/// Stages every file under the given pack directories.
///
/// Pack paths are relative to the project root and must exist; an absent
/// pack directory would otherwise silently produce a half-empty addon.
pub fn stage_packs(
    root: &Path,
    packs: &[String],
    transforms: &[EntryTransform],
) -> Result<(MemoryFS, StageSummary)> {
    let mut staged = MemoryFS::new();
    let mut summary = StageSummary::default();

    for pack in packs {
        let pack_dir = root.join(pack);
        if !pack_dir.is_dir() {
            return Err(Error::Filesystem {
                message: format!("Pack directory not found: {}", pack_dir.display()),
            });
        }

        for entry in WalkDir::new(&pack_dir) {
            let entry = entry.map_err(|e| Error::Filesystem {
                message: format!("Failed to walk '{}': {}", pack_dir.display(), e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| Error::Filesystem {
                    message: format!(
                        "Failed to relativize '{}': {}",
                        entry.path().display(),
                        e
                    ),
                })?;

            let file = stage_file(entry.path(), relative, transforms, &mut summary)?;
            staged.add_file(relative, file);
        }
    }

    Ok((staged, summary))
}

/// Writes the staged files to a deflate-compressed zip archive.
pub fn write_archive(staged: &MemoryFS, out_path: &Path) -> Result<()> {
    let file = fs::File::create(out_path).map_err(|e| Error::Filesystem {
        message: format!("Failed to create archive '{}': {}", out_path.display(), e),
    })?;

    let mut writer = ZipWriter::new(file);
    for (path, entry) in staged.files() {
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(entry.permissions);
        writer.start_file(zip_entry_name(path), options)?;
        writer.write_all(&entry.content)?;
    }
    writer.finish()?;

    Ok(())
}

fn stage_file(
    path: &Path,
    relative: &Path,
    transforms: &[EntryTransform],
    summary: &mut StageSummary,
) -> Result<File> {
    let raw = fs::read(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })?;

    let content = match matching_transform(relative, transforms) {
        Some(transform) => match transform.apply(&raw) {
            Ok(transformed) => {
                summary.transformed += 1;
                transformed
            }
            Err(e) => {
                warn!(
                    "Could not transform {}, using raw contents: {}",
                    relative.display(),
                    e
                );
                summary.fallbacks += 1;
                raw
            }
        },
        None => raw,
    };

    let mut file = File::new(content);
    file.permissions = file_mode(path);
    Ok(file)
}

fn matching_transform<'a>(
    relative: &Path,
    transforms: &'a [EntryTransform],
) -> Option<&'a EntryTransform> {
    let file_name = relative.file_name()?.to_str()?;
    transforms
        .iter()
        .find(|transform| transform.matches(file_name))
}

/// Joins path components with forward slashes, the separator zip entries
/// require on every platform.
fn zip_entry_name(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn file_mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|metadata| metadata.permissions().mode() & 0o777)
        .unwrap_or(0o644)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> u32 {
    0o644
}
