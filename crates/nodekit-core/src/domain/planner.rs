//! Artifact planner: `Selection` → `ArtifactPlan`.
//!
//! Pure and total; performs no I/O. Entries are emitted in apply order, so a
//! directory always precedes the files written into it.

use crate::domain::{
    entities::{ArtifactPlan, Selection},
    value_objects::{Database, Orm},
};

/// Environment file, relative to the project root.
pub const ENV_FILE: &str = ".env";

/// Placeholder the operator fills in after setup.
pub const ENV_CONTENT: &str = "DATABASE_URL=";

pub const CONFIG_DIR: &str = "src/config";
pub const MONGOOSE_CONNECTION_FILE: &str = "src/config/database.ts";

pub const PRISMA_DIR: &str = "prisma";
pub const PRISMA_SCHEMA_FILE: &str = "prisma/schema.prisma";

/// Connection module for mongoose projects.
///
/// Connects with `DATABASE_URL`, logs on success, and exits the process with
/// status 1 on failure.
pub const MONGOOSE_CONNECTION_TEMPLATE: &str = r#"import mongoose from 'mongoose';

const connectDB = async () => {
  try {
    await mongoose.connect(process.env.DATABASE_URL);
    console.log('MongoDB connected...');
  } catch (err) {
    console.error(err.message);
    process.exit(1);
  }
};

export default connectDB;"#;

/// Build the list of files and directories for a selection.
pub fn plan(selection: &Selection) -> ArtifactPlan {
    let mut plan = ArtifactPlan::new().with_file(ENV_FILE, ENV_CONTENT);

    if !selection.database().is_none() {
        plan.add_directory(CONFIG_DIR);
    }

    if selection.orm() == Orm::Mongoose {
        plan.add_file(MONGOOSE_CONNECTION_FILE, MONGOOSE_CONNECTION_TEMPLATE);
    }

    if selection.orm() == Orm::Prisma {
        plan.add_directory(PRISMA_DIR);
        plan.add_file(PRISMA_SCHEMA_FILE, prisma_schema(selection.database()));
    }

    plan
}

/// Prisma schema with `provider` set to the database identifier.
pub fn prisma_schema(database: Database) -> String {
    format!(
        r#"datasource db {{
  provider = "{database}"
  url      = env("DATABASE_URL")
}}
generator client {{
  provider = "prisma-client-js"
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FsEntry, value_objects::Framework};

    fn select(framework: Framework, database: Database, orm: Orm) -> Selection {
        Selection::new(framework, database, orm).unwrap()
    }

    #[test]
    fn no_database_plans_only_the_env_file() {
        let plan = plan(&select(Framework::Express, Database::None, Orm::None));
        assert_eq!(plan.entry_count(), 1);
        let env = plan.file(ENV_FILE).unwrap();
        assert_eq!(env.content, "DATABASE_URL=");
    }

    #[test]
    fn every_selection_has_exactly_one_env_file() {
        for fw in Framework::ALL {
            for db in Database::ALL {
                for &orm in db.supported_orms() {
                    let plan = plan(&select(fw, db, orm));
                    let envs = plan
                        .files()
                        .filter(|f| f.path.as_path() == std::path::Path::new(ENV_FILE))
                        .count();
                    assert_eq!(envs, 1, "{fw}/{db}/{orm}");
                    assert!(plan.validate().is_ok(), "{fw}/{db}/{orm}");
                }
            }
        }
    }

    #[test]
    fn relational_database_without_orm_only_adds_config_dir() {
        let plan = plan(&select(Framework::Fastify, Database::MySql, Orm::None));
        assert_eq!(plan.files().count(), 1);
        let dirs: Vec<_> = plan.directories().map(|d| d.path.to_string()).collect();
        assert_eq!(dirs, ["src/config"]);
    }

    #[test]
    fn mongoose_writes_connection_module_after_config_dir() {
        let plan = plan(&select(Framework::Fastify, Database::MongoDb, Orm::Mongoose));

        let paths: Vec<_> = plan.entries().iter().map(|e| e.path().to_string()).collect();
        assert_eq!(paths, [".env", "src/config", "src/config/database.ts"]);

        let module = plan.file(MONGOOSE_CONNECTION_FILE).unwrap();
        assert!(module.content.contains("mongoose.connect(process.env.DATABASE_URL)"));
        assert!(module.content.contains("process.exit(1)"));
        assert!(module.content.contains("export default connectDB;"));
    }

    #[test]
    fn prisma_schema_uses_database_as_provider() {
        let plan = plan(&select(Framework::NestJs, Database::PostgreSql, Orm::Prisma));

        assert!(matches!(&plan.entries()[2], FsEntry::Directory(d) if d.path.to_string() == "prisma"));
        let schema = plan.file(PRISMA_SCHEMA_FILE).unwrap();
        assert!(schema.content.contains(r#"provider = "postgresql""#));
        assert!(schema.content.contains(r#"url      = env("DATABASE_URL")"#));
        assert!(schema.content.contains(r#"provider = "prisma-client-js""#));
    }

    #[test]
    fn prisma_without_database_has_no_config_dir() {
        let plan = plan(&select(Framework::Express, Database::None, Orm::Prisma));
        assert!(plan.directories().all(|d| d.path.to_string() != CONFIG_DIR));
        assert!(plan.file(PRISMA_SCHEMA_FILE).unwrap().content.contains(r#"provider = "none""#));
    }

    #[test]
    fn prisma_schema_exact_format() {
        assert_eq!(
            prisma_schema(Database::MySql),
            "datasource db {\n  provider = \"mysql\"\n  url      = env(\"DATABASE_URL\")\n}\ngenerator client {\n  provider = \"prisma-client-js\"\n}"
        );
    }

    #[test]
    fn typeorm_sequelize_and_knex_write_no_orm_files() {
        for orm in [Orm::TypeOrm, Orm::Sequelize, Orm::Knex] {
            let plan = plan(&select(Framework::Express, Database::PostgreSql, orm));
            assert_eq!(plan.files().count(), 1, "{orm}");
        }
    }
}
