//! Driven (output) ports - implemented by infrastructure.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::domain::{PackageManifest, Question};
use crate::error::NodekitResult;

#[cfg(test)]
use mockall::automock;

/// Port for asking the operator a question.
///
/// Implemented by:
/// - `nodekit_cli::prompt::DialoguerPrompter` (interactive terminal)
/// - `nodekit_adapters::PresetAnswers` (flags, config, tests)
///
/// The returned string should be one of `question.choices`; anything else
/// is rejected when the answers are turned into a `Selection`.
#[cfg_attr(test, automock)]
pub trait Prompter: Send + Sync {
    fn ask(&self, question: &Question) -> NodekitResult<String>;
}

/// Port for reading the project manifest.
#[cfg_attr(test, automock)]
pub trait ManifestReader: Send + Sync {
    /// Read and parse the manifest located in `root`.
    ///
    /// Missing or malformed manifests must be reported as
    /// `ApplicationError::ManifestUnavailable`.
    fn read(&self, root: &Path) -> NodekitResult<PackageManifest>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nodekit_adapters::filesystem::LocalFilesystem` (production)
/// - `nodekit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NodekitResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> NodekitResult<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// Which dependency list a package is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallKind {
    Runtime,
    Development,
}

impl InstallKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for InstallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for installing packages into the project.
///
/// One call is one package-manager invocation; it blocks until the package
/// manager exits. Package names come from the static registries.
#[cfg_attr(test, automock)]
pub trait PackageInstaller: Send + Sync {
    fn install(
        &self,
        packages: &[&'static str],
        kind: InstallKind,
        root: &Path,
    ) -> NodekitResult<()>;
}
