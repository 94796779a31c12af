//! `package.json` reader.

use std::collections::BTreeMap;
use std::path::Path;

use nodekit_core::{
    application::{ApplicationError, ports::ManifestReader},
    domain::{MANIFEST_FILE, PackageManifest},
    error::NodekitResult,
};
use serde_json::Value;
use tracing::debug;

/// Reads `package.json` from the project root with `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageJsonReader;

impl PackageJsonReader {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestReader for PackageJsonReader {
    fn read(&self, root: &Path) -> NodekitResult<PackageManifest> {
        let path = root.join(MANIFEST_FILE);
        debug!(path = %path.display(), "Reading manifest");

        let unavailable = |reason: String| ApplicationError::ManifestUnavailable {
            path: path.clone(),
            reason,
        };

        let raw = std::fs::read_to_string(&path).map_err(|e| unavailable(e.to_string()))?;
        let value: Value =
            serde_json::from_str(&raw).map_err(|e| unavailable(format!("invalid JSON: {e}")))?;

        Ok(manifest_from_value(&value))
    }
}

/// Pick out the known fields. Any valid JSON is accepted; fields of an
/// unexpected type are treated as absent.
fn manifest_from_value(value: &Value) -> PackageManifest {
    let string = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    let table = |key: &str| -> BTreeMap<String, String> {
        value
            .get(key)
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|(name, v)| v.as_str().map(|s| (name.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    };

    PackageManifest {
        name: string("name"),
        version: string("version"),
        scripts: table("scripts"),
        dependencies: table("dependencies"),
        dev_dependencies: table("devDependencies"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodekit_core::error::NodekitError;
    use tempfile::TempDir;

    #[test]
    fn reads_name_and_dependencies() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("package.json"),
            r#"{
                "name": "api",
                "version": "1.0.0",
                "private": true,
                "dependencies": { "express": "^4.19.0" },
                "devDependencies": { "typescript": "^5.4.0" }
            }"#,
        )
        .unwrap();

        let manifest = PackageJsonReader.read(tmp.path()).unwrap();
        assert_eq!(manifest.display_name(), "api");
        assert!(manifest.declares("express"));
        assert!(manifest.declares("typescript"));
        assert!(!manifest.declares("cors"));
    }

    #[test]
    fn minimal_manifest_is_accepted() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), "{}").unwrap();

        let manifest = PackageJsonReader.read(tmp.path()).unwrap();
        assert_eq!(manifest.display_name(), "(unnamed)");
    }

    #[test]
    fn null_and_oddly_typed_fields_are_ignored() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("package.json"),
            r#"{
                "name": "api",
                "version": 1,
                "scripts": { "dev": { "cmd": "ts-node-dev" }, "start": "node dist" },
                "dependencies": null,
                "devDependencies": ["typescript"]
            }"#,
        )
        .unwrap();

        let manifest = PackageJsonReader.read(tmp.path()).unwrap();
        assert_eq!(manifest.display_name(), "api");
        assert_eq!(manifest.version, None);
        assert_eq!(manifest.scripts.len(), 1);
        assert_eq!(manifest.scripts["start"], "node dist");
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
    }

    #[test]
    fn non_object_json_is_accepted() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), "[]").unwrap();

        let manifest = PackageJsonReader.read(tmp.path()).unwrap();
        assert_eq!(manifest, PackageManifest::default());
    }

    #[test]
    fn non_string_name_is_unnamed() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), r#"{ "name": 42 }"#).unwrap();

        let manifest = PackageJsonReader.read(tmp.path()).unwrap();
        assert_eq!(manifest.display_name(), "(unnamed)");
    }

    #[test]
    fn missing_manifest_is_unavailable() {
        let tmp = TempDir::new().unwrap();

        let err = PackageJsonReader.read(tmp.path()).unwrap_err();
        assert!(matches!(
            err,
            NodekitError::Application(ApplicationError::ManifestUnavailable { ref path, .. })
                if path.ends_with("package.json")
        ));
    }

    #[test]
    fn malformed_manifest_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("package.json"), "{ not json").unwrap();

        let err = PackageJsonReader.read(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }
}
