//! Package and compatibility registry.
//!
//! Each framework, database, and ORM is described exactly once by a `*Def`
//! entry in a static registry. The resolver and the choice model only ever
//! read these tables; nothing mutates them at runtime.
//!
//! # Adding a New Choice
//!
//! 1. Add a variant to the enum in `value_objects.rs`
//! 2. Add one entry to the matching registry below
//! 3. For a database, list the ORMs it accepts in `orms`

use crate::domain::value_objects::{Database, Framework, Orm};

// ── Framework definitions ────────────────────────────────────────────────────

/// Runtime packages a framework pulls in.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDef {
    pub framework: Framework,

    /// Always non-empty; `assert_registry_integrity` enforces it.
    pub runtime: &'static [&'static str],
}

pub static FRAMEWORK_REGISTRY: &[FrameworkDef] = &[
    FrameworkDef {
        framework: Framework::Express,
        runtime: &["express", "@types/express", "cors"],
    },
    FrameworkDef {
        framework: Framework::Fastify,
        runtime: &["fastify", "@fastify/cors"],
    },
    FrameworkDef {
        framework: Framework::NestJs,
        runtime: &["@nestjs/core", "@nestjs/common", "@nestjs/platform-express"],
    },
];

// ── Database definitions ─────────────────────────────────────────────────────

/// Driver packages and the ORMs a database can be paired with.
#[derive(Debug, Clone, Copy)]
pub struct DatabaseDef {
    pub database: Database,

    /// Driver packages. Empty for `Database::None`.
    pub runtime: &'static [&'static str],

    /// ORMs offered once this database is chosen, in prompt order.
    pub orms: &'static [Orm],
}

/// ORMs offered for every relational (or absent) database.
const RELATIONAL_ORMS: &[Orm] = &[Orm::None, Orm::Prisma, Orm::TypeOrm, Orm::Sequelize, Orm::Knex];

pub static DATABASE_REGISTRY: &[DatabaseDef] = &[
    DatabaseDef {
        database: Database::None,
        runtime: &[],
        orms: RELATIONAL_ORMS,
    },
    DatabaseDef {
        database: Database::MongoDb,
        runtime: &["mongodb"],
        // No `none` here: a MongoDB project always gets mongoose.
        orms: &[Orm::Mongoose],
    },
    DatabaseDef {
        database: Database::PostgreSql,
        runtime: &["pg"],
        orms: RELATIONAL_ORMS,
    },
    DatabaseDef {
        database: Database::MySql,
        runtime: &["mysql2"],
        orms: RELATIONAL_ORMS,
    },
];

// ── ORM definitions ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct OrmDef {
    pub orm: Orm,
    pub runtime: &'static [&'static str],
    pub development: &'static [&'static str],
}

pub static ORM_REGISTRY: &[OrmDef] = &[
    OrmDef {
        orm: Orm::None,
        runtime: &[],
        development: &[],
    },
    OrmDef {
        orm: Orm::Mongoose,
        runtime: &["mongoose"],
        development: &[],
    },
    OrmDef {
        orm: Orm::Prisma,
        runtime: &["prisma", "@prisma/client"],
        development: &["ts-node", "ts-node-dev"],
    },
    OrmDef {
        orm: Orm::TypeOrm,
        runtime: &["typeorm", "reflect-metadata"],
        development: &["ts-node", "ts-node-dev"],
    },
    OrmDef {
        orm: Orm::Sequelize,
        runtime: &["sequelize", "sequelize-typescript"],
        development: &["ts-node", "ts-node-dev"],
    },
    OrmDef {
        orm: Orm::Knex,
        runtime: &["knex"],
        development: &["knex"],
    },
];

/// Driver sequelize needs alongside a PostgreSQL database.
pub const SEQUELIZE_POSTGRES_DRIVER: &str = "pg";

/// Driver sequelize gets for every other database, `none` included.
pub const SEQUELIZE_FALLBACK_DRIVER: &str = "mysql2";

// ── Registry lookup API ───────────────────────────────────────────────────────

/// Packages for a framework.
///
/// Every variant is registered (see `assert_registry_integrity`), so the
/// empty fallback is unreachable for a well-formed registry.
pub fn framework_packages(framework: Framework) -> &'static [&'static str] {
    find_framework(framework).map_or(&[], |def| def.runtime)
}

pub fn database_packages(database: Database) -> &'static [&'static str] {
    find_database(database).map_or(&[], |def| def.runtime)
}

pub fn orm_packages(orm: Orm) -> &'static [&'static str] {
    find_orm(orm).map_or(&[], |def| def.runtime)
}

pub fn orm_dev_packages(orm: Orm) -> &'static [&'static str] {
    find_orm(orm).map_or(&[], |def| def.development)
}

pub fn find_framework(framework: Framework) -> Option<&'static FrameworkDef> {
    FRAMEWORK_REGISTRY
        .iter()
        .find(|def| def.framework == framework)
}

pub fn find_database(database: Database) -> Option<&'static DatabaseDef> {
    DATABASE_REGISTRY
        .iter()
        .find(|def| def.database == database)
}

pub fn find_orm(orm: Orm) -> Option<&'static OrmDef> {
    ORM_REGISTRY.iter().find(|def| def.orm == orm)
}

/// ORMs the operator may pick once `database` is known.
pub fn orms_for(database: Database) -> &'static [Orm] {
    find_database(database).map_or(&[], |def| def.orms)
}

/// Check that `orm` may be paired with `database`.
///
/// Returns a human-readable reason on failure; the caller wraps it in a
/// `DomainError`.
pub fn validate_orm_for_database(orm: Orm, database: Database) -> Result<(), String> {
    let allowed = orms_for(database);
    if allowed.contains(&orm) {
        return Ok(());
    }

    let names: Vec<&str> = allowed.iter().map(|o| o.as_str()).collect();
    Err(format!(
        "{database} projects accept only: {}",
        names.join(", ")
    ))
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registries are internally consistent.
///
/// Panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for fw in Framework::ALL {
        let def = find_framework(fw)
            .unwrap_or_else(|| panic!("Framework {fw:?} is not registered"));
        assert!(
            !def.runtime.is_empty(),
            "Framework {fw:?} must contribute at least one package"
        );
    }

    for db in Database::ALL {
        let def = find_database(db).unwrap_or_else(|| panic!("Database {db:?} is not registered"));
        assert!(
            !def.orms.is_empty(),
            "Database {db:?} must offer at least one ORM"
        );
        assert_eq!(
            db.is_none(),
            def.runtime.is_empty(),
            "Database {db:?}: only `none` may have no driver packages"
        );
    }

    for orm in Orm::ALL {
        assert!(find_orm(orm).is_some(), "Orm {orm:?} is not registered");
        assert!(
            DATABASE_REGISTRY.iter().any(|d| d.orms.contains(&orm)),
            "Orm {orm:?} is not offered for any database"
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn mongodb_offers_only_mongoose() {
        assert_eq!(orms_for(Database::MongoDb), &[Orm::Mongoose]);
    }

    #[test]
    fn relational_and_none_offer_the_same_orms() {
        let expected = [Orm::None, Orm::Prisma, Orm::TypeOrm, Orm::Sequelize, Orm::Knex];
        for db in [Database::None, Database::PostgreSql, Database::MySql] {
            assert_eq!(orms_for(db), &expected, "for {db}");
        }
    }

    #[test]
    fn mongoose_is_rejected_outside_mongodb() {
        assert!(validate_orm_for_database(Orm::Mongoose, Database::MongoDb).is_ok());
        for db in [Database::None, Database::PostgreSql, Database::MySql] {
            assert!(validate_orm_for_database(Orm::Mongoose, db).is_err());
        }
    }

    #[test]
    fn mongodb_rejects_none_orm_with_reason() {
        let reason = validate_orm_for_database(Orm::None, Database::MongoDb).unwrap_err();
        assert!(reason.contains("mongodb"));
        assert!(reason.contains("mongoose"));
    }

    #[test]
    fn package_tables_match_known_values() {
        assert_eq!(
            framework_packages(Framework::Fastify),
            &["fastify", "@fastify/cors"]
        );
        assert_eq!(database_packages(Database::PostgreSql), &["pg"]);
        assert!(database_packages(Database::None).is_empty());
        assert_eq!(orm_packages(Orm::Prisma), &["prisma", "@prisma/client"]);
        assert_eq!(orm_dev_packages(Orm::Knex), &["knex"]);
        assert!(orm_dev_packages(Orm::Mongoose).is_empty());
        assert!(orm_packages(Orm::None).is_empty());
    }
}
