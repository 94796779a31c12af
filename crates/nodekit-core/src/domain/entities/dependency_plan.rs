use serde::Serialize;

/// Packages to install, split by runtime and development.
///
/// Insertion order is preserved and duplicates are kept: the plan is a
/// candidate list for the installer, not a minimal one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyPlan {
    runtime: Vec<&'static str>,
    development: Vec<&'static str>,
}

impl DependencyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_runtime(&mut self, packages: &[&'static str]) {
        self.runtime.extend_from_slice(packages);
    }

    pub(crate) fn add_development(&mut self, packages: &[&'static str]) {
        self.development.extend_from_slice(packages);
    }

    pub fn runtime(&self) -> &[&'static str] {
        &self.runtime
    }

    pub fn development(&self) -> &[&'static str] {
        &self.development
    }

    /// True when neither list has an entry.
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.development.is_empty()
    }

    /// Total identifiers across both lists, duplicates included.
    pub fn len(&self) -> usize {
        self.runtime.len() + self.development.len()
    }
}
