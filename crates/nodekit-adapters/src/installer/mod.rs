//! Package installer adapters.
//!
//! `CommandInstaller` runs a real package manager; `RecordingInstaller`
//! records calls for tests and dry runs.

mod command;
mod recording;

use std::fmt;
use std::str::FromStr;

use nodekit_core::application::ports::InstallKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use command::CommandInstaller;
pub use recording::{InstallCall, RecordingInstaller};

/// Supported Node.js package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
    Pnpm,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown package manager '{0}' (expected yarn, npm or pnpm)")]
pub struct UnknownPackageManager(pub String);

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Yarn, Self::Npm, Self::Pnpm];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
        }
    }

    /// Executable name.
    pub const fn program(self) -> &'static str {
        self.as_str()
    }

    /// Arguments preceding the package list.
    pub fn install_args(self, kind: InstallKind) -> &'static [&'static str] {
        match (self, kind) {
            (Self::Yarn, InstallKind::Runtime) => &["add"],
            (Self::Yarn, InstallKind::Development) => &["add", "--dev"],
            (Self::Npm, InstallKind::Runtime) => &["install"],
            (Self::Npm, InstallKind::Development) => &["install", "--save-dev"],
            (Self::Pnpm, InstallKind::Runtime) => &["add"],
            (Self::Pnpm, InstallKind::Development) => &["add", "--save-dev"],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = UnknownPackageManager;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yarn" => Ok(Self::Yarn),
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(UnknownPackageManager(other.to_string())),
        }
    }
}

/// Drop repeated identifiers, keeping the first occurrence.
pub fn dedupe<'a>(packages: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::with_capacity(packages.len());
    for &pkg in packages {
        if !out.contains(&pkg) {
            out.push(pkg);
        }
    }
    out
}
