//! JSON serialization helpers.
//!
//! Patched manifests and generated data modules are written with
//! four-space indentation. `serde_json`'s stock pretty printer uses two
//! spaces, so serialization goes through a custom formatter instead.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::error::Result;

/// Serializes a JSON value with four-space indentation.
///
/// The output carries no trailing newline.
pub fn to_pretty_string(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}
