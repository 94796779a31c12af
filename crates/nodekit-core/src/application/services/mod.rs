//! Application services - orchestrate use cases.

pub mod setup_service;

pub use setup_service::{SetupOptions, SetupReport, SetupService};
