//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::InstallKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// `package.json` is missing or unreadable. Nothing has been touched yet.
    #[error("Cannot read project manifest {path}: {reason}")]
    ManifestUnavailable { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The package manager exited unsuccessfully or could not be started.
    #[error("Installing {kind} dependencies failed (`{command}`): {reason}")]
    InstallFailed {
        kind: InstallKind,
        command: String,
        reason: String,
    },

    /// A prompt could not be answered (terminal closed, input aborted).
    #[error("Prompt for {question} failed: {reason}")]
    PromptFailed { question: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestUnavailable { path, .. } => vec![
                format!("No usable manifest at {}", path.display()),
                "Run `npm init -y` or `yarn init -y` first".into(),
                "Or pass --dir to point at an existing Node.js project".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::InstallFailed { command, .. } => vec![
                format!("Re-run `{command}` manually to see the full output"),
                "Check that the package manager is installed and on PATH".into(),
                "Use --skip-install to only generate files".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run in an interactive terminal".into(),
                "Or pass --framework, --database and --orm with --yes".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestUnavailable { .. } => ErrorCategory::Precondition,
            Self::FilesystemError { .. } | Self::InstallFailed { .. } => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Cancelled,
        }
    }
}
