//! nodekit core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the nodekit
//! project setup tool: it turns three answers (framework, database, ORM)
//! into a list of packages to install and a list of files to write.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           nodekit-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (SetupService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Prompter, ManifestReader, Filesystem,  │
//! │           PackageInstaller)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    nodekit-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Selection, resolve, plan, registries) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use nodekit_core::domain::{Database, Framework, Orm, Selection, plan, resolve};
//!
//! let selection = Selection::new(Framework::Express, Database::None, Orm::None).unwrap();
//!
//! assert_eq!(resolve(&selection).runtime(), ["express", "@types/express", "cors"]);
//! assert_eq!(plan(&selection).entry_count(), 1);
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{
        SetupOptions, SetupReport, SetupService,
        ports::{Filesystem, InstallKind, ManifestReader, PackageInstaller, Prompter},
    };
    pub use crate::domain::{
        Answers, ArtifactPlan, Database, DependencyPlan, Framework, Orm, PackageManifest,
        Question, QuestionId, Selection, SelectionBuilder,
    };
    pub use crate::error::{NodekitError, NodekitResult};
}
