//! Installer that spawns the package manager.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use nodekit_core::{
    application::{
        ApplicationError,
        ports::{InstallKind, PackageInstaller},
    },
    error::NodekitResult,
};
use tracing::{debug, info, instrument};

use super::{PackageManager, dedupe};

/// Runs `yarn add` / `npm install` / `pnpm add` synchronously in the project root.
///
/// stderr is always captured for the failure reason. stdout is captured
/// and logged at debug level unless streaming is turned on.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    manager: PackageManager,
    program: PathBuf,
    stream_stdout: bool,
}

impl CommandInstaller {
    pub fn new(manager: PackageManager) -> Self {
        Self {
            manager,
            program: PathBuf::from(manager.program()),
            stream_stdout: false,
        }
    }

    /// Pass the package manager's stdout straight through to ours.
    pub fn stream_stdout(mut self, stream: bool) -> Self {
        self.stream_stdout = stream;
        self
    }

    /// Use a specific executable instead of looking the manager up on `PATH`.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// Arguments for one invocation, duplicates removed.
    pub fn args(&self, packages: &[&str], kind: InstallKind) -> Vec<String> {
        self.manager
            .install_args(kind)
            .iter()
            .copied()
            .chain(dedupe(packages))
            .map(str::to_string)
            .collect()
    }

    /// Human-readable command line, as shown in errors.
    pub fn command_line(&self, packages: &[&str], kind: InstallKind) -> String {
        let mut line = self.manager.program().to_string();
        for arg in self.args(packages, kind) {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new(PackageManager::default())
    }
}

impl PackageInstaller for CommandInstaller {
    #[instrument(skip_all, fields(manager = %self.manager, %kind, root = %root.display()))]
    fn install(
        &self,
        packages: &[&'static str],
        kind: InstallKind,
        root: &Path,
    ) -> NodekitResult<()> {
        let command_line = self.command_line(packages, kind);
        info!(command = %command_line, "Running package manager");

        let failed = |reason: String| ApplicationError::InstallFailed {
            kind,
            command: command_line.clone(),
            reason,
        };

        let stdout = if self.stream_stdout {
            Stdio::inherit()
        } else {
            Stdio::piped()
        };

        let output = Command::new(&self.program)
            .args(self.args(packages, kind))
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| failed(format!("could not start {}: {e}", self.program.display())))?;

        if !self.stream_stdout {
            debug!(stdout = %String::from_utf8_lossy(&output.stdout).trim_end(), "Package manager output");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                msg => msg.to_string(),
            };
            return Err(failed(reason).into());
        }

        Ok(())
    }
}
