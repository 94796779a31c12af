//! Infrastructure adapters for nodekit.
//!
//! This crate implements the ports defined in `nodekit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod manifest;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{CommandInstaller, PackageManager, RecordingInstaller};
pub use manifest::PackageJsonReader;
pub use prompt::PresetAnswers;
