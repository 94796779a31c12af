use std::collections::BTreeMap;

/// File name of the project manifest, looked up in the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// The parts of `package.json` the setup flow cares about.
///
/// Every field is optional: a freshly `npm init`-ed manifest may contain
/// very little, and readers drop fields they cannot interpret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    /// `devDependencies` in `package.json`.
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Name for display, `"(unnamed)"` if the manifest has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }

    /// Whether `package` is already declared in either dependency table.
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }
}
