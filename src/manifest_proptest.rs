//! Property-based tests for manifest patching.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::manifest::{patch_bytes, patch_manifest};
    use crate::version::ResolvedVersion;
    use proptest::prelude::*;
    use regex::Regex;
    use serde_json::json;

    const INTERNAL_UUID: &str = "43916969-950c-4573-b328-765089309601";

    fn version(patch: u64, dev: Option<u64>) -> ResolvedVersion {
        ResolvedVersion {
            major: 1,
            minor: 1,
            patch,
            dev,
        }
    }

    fn internal_uuids() -> Vec<String> {
        vec![INTERNAL_UUID.to_string()]
    }

    // ============================================================================
    // idempotence property tests
    // ============================================================================

    proptest! {
        /// Property: patching an already-patched manifest changes nothing
        #[test]
        fn patch_is_idempotent(
            name in "[A-Za-z][A-Za-z ]{0,24}",
            start_patch in 0u64..1000,
            patch in 0u64..10_000,
            dev in proptest::option::of(0u64..100),
        ) {
            let target = version(patch, dev);
            let mut manifest = json!({
                "header": {
                    "name": name,
                    "version": [1, 1, start_patch],
                },
                "modules": [
                    {"uuid": "module-uuid", "version": [1, 1, start_patch]},
                ],
                "dependencies": [
                    {"uuid": INTERNAL_UUID, "version": [1, 1, start_patch]},
                ],
            });

            patch_manifest(&mut manifest, &target, &internal_uuids()).unwrap();
            let once = manifest.clone();
            patch_manifest(&mut manifest, &target, &internal_uuids()).unwrap();

            prop_assert_eq!(once, manifest);
        }

        /// Property: re-serialized manifests are byte-stable under repeated patching
        #[test]
        fn patch_bytes_is_idempotent_at_byte_level(
            patch in 0u64..10_000,
            dev in proptest::option::of(0u64..100),
        ) {
            let target = version(patch, dev);
            let manifest = json!({
                "header": {"name": "Addon", "version": [1, 1, 0]},
                "dependencies": [{"uuid": INTERNAL_UUID, "version": [1, 1, 0]}],
            });
            let raw = serde_json::to_vec(&manifest).unwrap();

            let once = patch_bytes(&raw, &target, &internal_uuids()).unwrap();
            let twice = patch_bytes(&once, &target, &internal_uuids()).unwrap();

            prop_assert_eq!(once, twice);
        }
    }

    // ============================================================================
    // version slot property tests
    // ============================================================================

    proptest! {
        /// Property: slots 0 and 1 survive patching and slot 2 becomes the
        /// resolved patch, normalized to exactly three components
        #[test]
        fn patch_preserves_major_and_minor_slots(
            major in 0u64..1000,
            minor in 0u64..1000,
            extra in proptest::collection::vec(0u64..50, 0..4),
            patch in 0u64..10_000,
        ) {
            let mut slots = vec![json!(major), json!(minor)];
            slots.extend(extra.iter().map(|n| json!(n)));
            let mut manifest = json!({"header": {"version": slots}});

            patch_manifest(&mut manifest, &version(patch, None), &[]).unwrap();

            prop_assert_eq!(&manifest["header"]["version"], &json!([major, minor, patch]));
        }

        /// Property: patching is deterministic (same input = same output)
        #[test]
        fn patch_is_deterministic(
            patch in 0u64..10_000,
            dev in proptest::option::of(0u64..100),
        ) {
            let target = version(patch, dev);
            let source = json!({
                "header": {"name": "Addon v0.1.2", "version": [1, 1, 2]},
            });

            let mut first = source.clone();
            let mut second = source;
            patch_manifest(&mut first, &target, &[]).unwrap();
            patch_manifest(&mut second, &target, &[]).unwrap();

            prop_assert_eq!(first, second);
        }
    }

    // ============================================================================
    // name suffix property tests
    // ============================================================================

    proptest! {
        /// Property: the patched name carries exactly one version suffix, even
        /// when the incoming name already had one
        #[test]
        fn patched_name_has_exactly_one_version_suffix(
            name in "[A-Za-z][A-Za-z ]{0,19}",
            prior_major in 0u64..10,
            prior_minor in 0u64..10,
            prior_patch in 0u64..100,
            patch in 0u64..10_000,
        ) {
            let suffixed = format!("{} v{}.{}.{}", name, prior_major, prior_minor, prior_patch);
            let mut manifest = json!({"header": {"name": suffixed, "version": [1, 1, 0]}});

            patch_manifest(&mut manifest, &version(patch, None), &[]).unwrap();

            let patched_name = manifest["header"]["name"].as_str().unwrap();
            let pattern = Regex::new(r" v\d+\.\d+\.\d+(\+dev\d+)?").unwrap();
            prop_assert_eq!(pattern.find_iter(patched_name).count(), 1);
            let expected_suffix = format!(" v1.1.{}", patch);
            prop_assert!(patched_name.ends_with(&expected_suffix));
        }
    }

    // ============================================================================
    // dependency property tests
    // ============================================================================

    proptest! {
        /// Property: dependencies with foreign uuids are never modified
        #[test]
        fn foreign_dependencies_are_never_patched(
            uuid in "[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
            dep_slots in proptest::collection::vec(0u64..50, 2..5),
            patch in 0u64..10_000,
        ) {
            prop_assume!(uuid.as_str() != INTERNAL_UUID);

            let dependency = json!({"uuid": uuid, "version": dep_slots});
            let mut manifest = json!({"dependencies": [dependency.clone()]});

            patch_manifest(&mut manifest, &version(patch, None), &internal_uuids()).unwrap();

            prop_assert_eq!(&manifest["dependencies"][0], &dependency);
        }
    }
}
