// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for nodekit.
//!
//! This module contains the answer-to-artifact resolution engine: the choice
//! model, the dependency resolver and the artifact planner. It performs no
//! I/O; all filesystem, manifest and package-manager concerns are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Immutable values**: `Selection` is validated once and never mutated
//! - **Static tables**: Package mappings live in `capabilities.rs`
//!
// Public API - what the world sees
pub mod capabilities;
pub mod entities;
pub mod error;
pub mod planner;
pub mod questions;
pub mod resolver;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact_plan::{ArtifactPlan, DirectoryToCreate, FileToWrite, FsEntry},
    common::RelativePath,
    dependency_plan::DependencyPlan,
    manifest::{MANIFEST_FILE, PackageManifest},
    selection::{HasDatabase, NoDatabase, Selection, SelectionBuilder},
};

pub use error::{DomainError, ErrorCategory};

pub use planner::plan;
pub use questions::{Answers, Question, QuestionId, available_choices, question};
pub use resolver::resolve;

pub use value_objects::{Database, Framework, Orm};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // End-to-end scenarios through the public domain API
    // ========================================================================

    #[test]
    fn scenario_express_no_database() {
        let selection = Selection::new(Framework::Express, Database::None, Orm::None).unwrap();

        let deps = resolve(&selection);
        assert_eq!(deps.runtime(), ["express", "@types/express", "cors"]);
        assert!(deps.development().is_empty());

        let artifacts = plan(&selection);
        assert_eq!(artifacts.entry_count(), 1);
        assert_eq!(artifacts.file(".env").unwrap().content, "DATABASE_URL=");
    }

    #[test]
    fn scenario_fastify_mongoose() {
        let selection = Selection::builder()
            .framework(Framework::Fastify)
            .database(Database::MongoDb)
            .orm(Orm::Mongoose)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            resolve(&selection).runtime(),
            ["fastify", "@fastify/cors", "mongodb", "mongoose"]
        );

        let artifacts = plan(&selection);
        assert!(artifacts.file(".env").is_some());
        assert!(artifacts.file("src/config/database.ts").is_some());
    }

    #[test]
    fn scenario_nestjs_postgres_prisma() {
        let selection =
            Selection::new(Framework::NestJs, Database::PostgreSql, Orm::Prisma).unwrap();

        let deps = resolve(&selection);
        for pkg in ["prisma", "@prisma/client", "pg"] {
            assert!(deps.runtime().contains(&pkg), "missing {pkg}");
        }
        for pkg in ["ts-node", "ts-node-dev"] {
            assert!(deps.development().contains(&pkg), "missing {pkg}");
        }

        let artifacts = plan(&selection);
        assert!(artifacts.file(".env").is_some());
        let schema = artifacts.file("prisma/schema.prisma").unwrap();
        assert!(schema.content.contains(r#"provider = "postgresql""#));
    }

    #[test]
    fn scenario_express_mysql_sequelize_duplicates_driver() {
        let selection =
            Selection::new(Framework::Express, Database::MySql, Orm::Sequelize).unwrap();

        let runtime = resolve(&selection).runtime().to_vec();
        assert_eq!(runtime.iter().filter(|p| **p == "mysql2").count(), 2);
    }

    // ========================================================================
    // Choice model → Selection
    // ========================================================================

    #[test]
    fn every_offered_choice_builds_a_valid_selection() {
        let mut answers = Answers::new();
        for fw in available_choices(QuestionId::Framework, &answers) {
            answers.insert(QuestionId::Framework, fw);
            for db in available_choices(QuestionId::Database, &answers) {
                answers.insert(QuestionId::Database, db);
                for orm in available_choices(QuestionId::Orm, &answers) {
                    answers.insert(QuestionId::Orm, orm);
                    let selection = Selection::try_from(&answers);
                    assert!(selection.is_ok(), "{fw}/{db}/{orm}");
                    assert!(DomainValidator::validate_selection(&selection.unwrap()).is_ok());
                }
            }
        }
    }

    // ========================================================================
    // Artifact plan validation
    // ========================================================================

    #[test]
    fn artifact_plan_validates_duplicates() {
        let plan = ArtifactPlan::new()
            .with_file(".env", "")
            .with_file(".env", "DATABASE_URL=");

        assert!(matches!(
            DomainValidator::validate_artifact_plan(&plan),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn artifact_plan_validates_empty() {
        assert!(ArtifactPlan::new().validate().is_err());
    }

    #[test]
    fn artifact_plan_counts_entries() {
        let plan = ArtifactPlan::new()
            .with_directory("prisma")
            .with_file("prisma/schema.prisma", "x");

        assert_eq!(plan.entry_count(), 2);
        assert_eq!(plan.files().count(), 1);
        assert_eq!(plan.directories().count(), 1);
    }

    #[test]
    fn incompatible_orm_is_a_compatibility_error() {
        let err = Selection::new(Framework::Express, Database::MongoDb, Orm::None).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert!(err.suggestions().iter().any(|s| s.contains("mongoose")));
    }
}
