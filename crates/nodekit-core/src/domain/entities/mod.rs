pub mod artifact_plan;
pub mod common;
pub mod dependency_plan;
pub mod manifest;
pub mod selection;

pub use crate::domain::DomainError;
pub use artifact_plan::ArtifactPlan;
pub use dependency_plan::DependencyPlan;
pub use manifest::PackageManifest;
pub use selection::Selection;
