//! Application ports (traits) for external dependencies.
//!
//! Adapters in `nodekit-adapters` (and the prompter in `nodekit-cli`)
//! implement these.
//!
//! - `Prompter`: asks the operator one question
//! - `ManifestReader`: loads `package.json`
//! - `Filesystem`: directory and file writes
//! - `PackageInstaller`: runs the package manager

pub mod output;

pub use output::{Filesystem, InstallKind, ManifestReader, PackageInstaller, Prompter};
