//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions, and sample
//! pack content to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_minimal_config().with_packs();
//!     // ... test code
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Minimal valid configuration.
    pub const MINIMAL: &str = r#"
name: TestAddon
behavior-pack: bp
resource-pack: rp
"#;

    /// Configuration with the pack UUIDs registered as internal.
    pub const WITH_INTERNAL_UUIDS: &str = r#"
name: TestAddon
behavior-pack: bp
resource-pack: rp
internal-uuids:
  - 43916969-950c-4573-b328-765089309601
  - 685c4909-66c3-4d45-930c-720498309602
"#;

    /// Configuration with the gate definition merge stage enabled.
    pub const WITH_DEFINITIONS: &str = r#"
name: TestAddon
behavior-pack: bp
resource-pack: rp
internal-uuids:
  - 43916969-950c-4573-b328-765089309601
  - 685c4909-66c3-4d45-930c-720498309602
definitions:
  source: definitions
"#;

    /// Configuration with dev-build numbering turned off.
    pub const DEV_BUILDS_DISABLED: &str = r#"
name: TestAddon
behavior-pack: bp
resource-pack: rp
dev-builds: false
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "name: [unclosed";
}

/// Realistic pack manifests for testing.
///
/// Both packs start at version `[1, 1, 5]`. The behavior pack depends on
/// the resource pack (internal) and on a script engine module (external),
/// so patching tests can cover both dependency kinds.
#[allow(dead_code)]
pub mod manifests {
    /// Behavior pack manifest.
    pub const BEHAVIOR: &str = r#"{
    "format_version": 2,
    "header": {
        "name": "Test Addon",
        "description": "Behavior pack for integration tests",
        "uuid": "43916969-950c-4573-b328-765089309601",
        "version": [1, 1, 5],
        "min_engine_version": [1, 21, 0]
    },
    "modules": [
        {
            "type": "data",
            "uuid": "0c21f696-2bad-4476-ac8e-d7b3360d19cf",
            "version": [1, 1, 5]
        },
        {
            "type": "script",
            "language": "javascript",
            "uuid": "92fac2a7-8f0f-4c7e-9a6c-8b2f0f6a2f61",
            "entry": "scripts/main.js",
            "version": [1, 1, 5]
        }
    ],
    "dependencies": [
        {
            "uuid": "685c4909-66c3-4d45-930c-720498309602",
            "version": [1, 1, 5]
        },
        {
            "module_name": "@minecraft/server",
            "version": "1.12.0"
        }
    ]
}"#;

    /// Resource pack manifest.
    pub const RESOURCE: &str = r#"{
    "format_version": 2,
    "header": {
        "name": "Test Addon Resources",
        "description": "Resource pack for integration tests",
        "uuid": "685c4909-66c3-4d45-930c-720498309602",
        "version": [1, 1, 5],
        "min_engine_version": [1, 21, 0]
    },
    "modules": [
        {
            "type": "resources",
            "uuid": "3a8a5a5f-96c2-44e8-86f4-6f6f0b26a1a7",
            "version": [1, 1, 5]
        }
    ],
    "dependencies": [
        {
            "uuid": "43916969-950c-4573-b328-765089309601",
            "version": [1, 1, 5]
        }
    ]
}"#;
}

/// A test fixture that provides a temporary addon project.
///
/// This struct simplifies the common pattern of creating a temp directory
/// and populating it with a `.addon-packer.yaml` configuration file and
/// the two pack trees.
///
/// The fixture directory is never a git repository, so version resolution
/// falls back to a commit count of 0 and a clean working tree. Builds
/// against the fixture deterministically produce version `v1.1.0`.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new().with_minimal_config().with_packs();
///
/// let mut cmd = fixture.command();
/// cmd.arg("build").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.addon-packer.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".addon-packer.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add the minimal valid configuration.
    pub fn with_minimal_config(self) -> Self {
        self.with_config(configs::MINIMAL)
    }

    /// Add both pack trees with realistic manifests and a few content files.
    pub fn with_packs(self) -> Self {
        self.with_file("bp/manifest.json", manifests::BEHAVIOR)
            .with_file("bp/scripts/main.js", "import './data/gate_definitions.js';\n")
            .with_file("rp/manifest.json", manifests::RESOURCE)
            .with_file("rp/textures/gate.png", "not a real png")
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".addon-packer.yaml")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("addon-packer");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_packs() {
        let fixture = TestFixture::new().with_minimal_config().with_packs();
        assert!(fixture.config_path().exists());
        assert!(fixture.path().join("bp/manifest.json").exists());
        assert!(fixture.path().join("rp/manifest.json").exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        let configs = [
            configs::MINIMAL,
            configs::WITH_INTERNAL_UUIDS,
            configs::WITH_DEFINITIONS,
            configs::DEV_BUILDS_DISABLED,
        ];

        for config in configs {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_manifests_are_valid_json() {
        for manifest in [manifests::BEHAVIOR, manifests::RESOURCE] {
            serde_json::from_str::<serde_json::Value>(manifest)
                .expect("Manifest should be valid JSON");
        }
    }
}
