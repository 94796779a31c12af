// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Unknown {field} '{value}'")]
    UnknownChoice { field: &'static str, value: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Duplicate path in artifact plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("orm '{orm}' cannot be used with database '{database}': {reason}")]
    IncompatibleOrm {
        orm: String,
        database: String,
        reason: String, // populated from capabilities::validate_orm_for_database
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownChoice { field, value } => vec![
                format!("'{value}' is not a valid {field}"),
                format!("Run `nodekit choices` to list every valid {field}"),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("No {field} was selected"),
                format!("Pass --{field} or answer the {field} prompt"),
            ],
            Self::IncompatibleOrm { database, .. } => vec![
                format!("Run `nodekit choices --database {database}` to see valid ORMs"),
                "MongoDB projects always use mongoose".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownChoice { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::IncompatibleOrm { .. } => ErrorCategory::Compatibility,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
