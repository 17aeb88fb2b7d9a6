//! # Gate Definition Merging
//!
//! Gate definitions live as one JSON fragment file per gate so that
//! adding a gate is a single-file change. Before packaging, the
//! fragments are concatenated into a generated JavaScript data module
//! that the pack scripts import, since packs cannot load loose JSON at
//! runtime.
//!
//! Fragments merge in sorted filename order, which keeps the generated
//! module deterministic across filesystems. A fragment that fails to
//! read or parse is skipped with a warning rather than failing the
//! build; the module is still written with whatever merged successfully.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::json;

/// Collects and parses all gate definition fragments in a directory.
///
/// Only files with a `.json` extension participate. A missing directory
/// yields an empty list so projects without fragments build cleanly.
pub fn merge_definitions(dir: &Path) -> Result<Vec<Value>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut definitions = Vec::new();
    for path in fragment_files(dir)? {
        match read_fragment(&path) {
            Ok(value) => definitions.push(value),
            Err(e) => {
                warn!("Skipping gate definition {}: {}", path.display(), e);
            }
        }
    }

    Ok(definitions)
}

/// Renders the merged definitions as an importable JavaScript module.
pub fn render_module(export_name: &str, definitions: &[Value]) -> Result<String> {
    let body = json::to_pretty_string(&Value::Array(definitions.to_vec()))?;
    Ok(format!("export const {} = {};\n", export_name, body))
}

/// Writes the generated module, creating parent directories as needed.
pub fn write_module(path: &Path, export_name: &str, definitions: &[Value]) -> Result<()> {
    let module = render_module(export_name, definitions)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", parent.display(), e),
        })?;
    }

    fs::write(path, module).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to write definitions module '{}': {}",
            path.display(),
            e
        ),
    })
}

fn fragment_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn read_fragment(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
