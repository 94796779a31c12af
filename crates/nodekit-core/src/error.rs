//! Unified error handling for nodekit core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single `suggestions()` / `category()` surface.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for nodekit-core operations.
#[derive(Debug, Error, Clone)]
pub enum NodekitError {
    /// Errors from the domain layer (invalid or incompatible choices).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (manifest, filesystem, installer).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl NodekitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    /// A precondition on the project (e.g. its manifest) is not met.
    Precondition,
    /// The operator aborted a prompt.
    Cancelled,
    Internal,
}

/// Convenient result type alias.
pub type NodekitResult<T> = Result<T, NodekitError>;
