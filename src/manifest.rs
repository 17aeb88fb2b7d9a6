//! # Manifest Patching
//!
//! Bedrock pack manifests carry the pack version in three places: the
//! `header`, each entry in `modules`, and each entry in `dependencies`.
//! This module rewrites all of them to the resolved build version so a
//! packaged addon always ships self-consistent metadata.
//!
//! Patching is pure: it transforms a parsed JSON document in place and
//! never touches the filesystem. The archive stage feeds it manifest
//! bytes as they stream into the archive and falls back to the raw bytes
//! if patching fails, so a malformed manifest degrades the archive
//! instead of aborting the build.
//!
//! ## Rules
//!
//! - Version arrays keep their first two components and get the resolved
//!   patch in the third slot, normalized to exactly three components.
//! - The header name gains a ` v1.1.43+dev0` style suffix; any previous
//!   suffix is stripped first, so repeated patching is idempotent.
//! - Dependency entries are patched only when their uuid is one of the
//!   configured internal pack uuids. Script engine dependencies keep
//!   their pinned versions.
//! - Absent sections and entries without a `version` key are tolerated;
//!   a version that is not an array of at least two components is an
//!   error.

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::json;
use crate::version::ResolvedVersion;

/// File name of a Bedrock pack manifest.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Pattern matching a version suffix previously appended to a pack name.
const NAME_VERSION_PATTERN: &str = r" v\d+\.\d+\.\d+(\+dev\d+)?";

/// Patches a parsed manifest in place to carry the resolved version.
pub fn patch_manifest(
    manifest: &mut Value,
    version: &ResolvedVersion,
    internal_uuids: &[String],
) -> Result<()> {
    if let Some(header) = manifest.get_mut("header").and_then(Value::as_object_mut) {
        patch_version_entry(header, "header", version.patch)?;
        patch_header_name(header, version)?;
    }

    if let Some(modules) = manifest.get_mut("modules").and_then(Value::as_array_mut) {
        for module in modules.iter_mut() {
            if let Some(object) = module.as_object_mut() {
                patch_version_entry(object, "modules", version.patch)?;
            }
        }
    }

    if let Some(dependencies) = manifest
        .get_mut("dependencies")
        .and_then(Value::as_array_mut)
    {
        for dependency in dependencies.iter_mut() {
            if let Some(object) = dependency.as_object_mut() {
                if is_internal(object, internal_uuids) {
                    patch_version_entry(object, "dependencies", version.patch)?;
                }
            }
        }
    }

    Ok(())
}

/// Patches raw manifest bytes, returning the re-serialized document.
///
/// This is the transform applied while manifests stream into the
/// archive. The output is four-space indented, so a patched manifest
/// diffs cleanly against hand-edited pack sources.
pub fn patch_bytes(
    raw: &[u8],
    version: &ResolvedVersion,
    internal_uuids: &[String],
) -> Result<Vec<u8>> {
    let mut manifest: Value = serde_json::from_slice(raw)?;
    patch_manifest(&mut manifest, version, internal_uuids)?;
    Ok(json::to_pretty_string(&manifest)?.into_bytes())
}

fn patch_version_entry(object: &mut Map<String, Value>, section: &str, patch: u64) -> Result<()> {
    let current = match object.get("version") {
        Some(slots) => slots,
        None => return Ok(()),
    };

    let patched = patched_version(section, current, patch)?;
    object.insert("version".to_string(), patched);
    Ok(())
}

fn patch_header_name(header: &mut Map<String, Value>, version: &ResolvedVersion) -> Result<()> {
    let name = match header.get("name").and_then(Value::as_str) {
        Some(name) => name.to_string(),
        None => return Ok(()),
    };

    let pattern = Regex::new(NAME_VERSION_PATTERN)?;
    let base_name = pattern.replace_all(&name, "");
    header.insert(
        "name".to_string(),
        Value::String(format!("{} {}", base_name, version)),
    );
    Ok(())
}

/// Rebuilds a version array with the resolved patch in the third slot.
///
/// The result always has exactly three components, whatever length the
/// input had beyond the required two.
fn patched_version(section: &str, current: &Value, patch: u64) -> Result<Value> {
    let slots = current.as_array().ok_or_else(|| Error::Manifest {
        section: section.to_string(),
        message: "version is not an array".to_string(),
    })?;

    if slots.len() < 2 {
        return Err(Error::Manifest {
            section: section.to_string(),
            message: format!(
                "version array has {} components, expected at least 2",
                slots.len()
            ),
        });
    }

    Ok(Value::Array(vec![
        slots[0].clone(),
        slots[1].clone(),
        Value::from(patch),
    ]))
}

fn is_internal(dependency: &Map<String, Value>, internal_uuids: &[String]) -> bool {
    dependency
        .get("uuid")
        .and_then(Value::as_str)
        .map(|uuid| internal_uuids.iter().any(|known| known == uuid))
        .unwrap_or(false)
}
