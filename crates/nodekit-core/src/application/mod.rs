//! Application layer for nodekit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`SetupService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{SetupOptions, SetupReport, SetupService};

pub use ports::{Filesystem, InstallKind, ManifestReader, PackageInstaller, Prompter};

pub use error::ApplicationError;
