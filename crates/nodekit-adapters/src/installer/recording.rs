//! Installer that records calls instead of running anything.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use nodekit_core::{
    application::{
        ApplicationError,
        ports::{InstallKind, PackageInstaller},
    },
    error::NodekitResult,
};

/// One recorded `install` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCall {
    pub kind: InstallKind,
    pub packages: Vec<&'static str>,
    pub root: PathBuf,
}

/// Records every call. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Arc<Mutex<Vec<InstallCall>>>,
    fail_on: Option<InstallKind>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make calls of `kind` fail after being recorded.
    pub fn failing_on(mut self, kind: InstallKind) -> Self {
        self.fail_on = Some(kind);
        self
    }

    pub fn calls(&self) -> Vec<InstallCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl PackageInstaller for RecordingInstaller {
    fn install(
        &self,
        packages: &[&'static str],
        kind: InstallKind,
        root: &Path,
    ) -> NodekitResult<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(InstallCall {
                kind,
                packages: packages.to_vec(),
                root: root.to_path_buf(),
            });
        }

        if self.fail_on == Some(kind) {
            return Err(ApplicationError::InstallFailed {
                kind,
                command: format!("record {kind} {}", packages.join(" ")),
                reason: "configured to fail".into(),
            }
            .into());
        }

        Ok(())
    }
}
