//! Dependency resolver: `Selection` → `DependencyPlan`.
//!
//! Pure and total. Every package comes from the static tables in
//! `capabilities.rs`; the only cross-field rule is the sequelize driver.

use crate::domain::{
    capabilities::{self, SEQUELIZE_FALLBACK_DRIVER, SEQUELIZE_POSTGRES_DRIVER},
    entities::{DependencyPlan, Selection},
    value_objects::{Database, Orm},
};

/// Resolve the packages a selection needs.
///
/// Order: framework, then database driver, then ORM (runtime, with its dev
/// packages going to the development list), then the sequelize driver.
/// Duplicates are kept.
pub fn resolve(selection: &Selection) -> DependencyPlan {
    let mut plan = DependencyPlan::new();

    plan.add_runtime(capabilities::framework_packages(selection.framework()));

    if !selection.database().is_none() {
        plan.add_runtime(capabilities::database_packages(selection.database()));
    }

    if !selection.orm().is_none() {
        plan.add_runtime(capabilities::orm_packages(selection.orm()));
        plan.add_development(capabilities::orm_dev_packages(selection.orm()));
    }

    if selection.orm() == Orm::Sequelize {
        plan.add_runtime(&[sequelize_driver(selection.database())]);
    }

    plan
}

/// Any database other than PostgreSQL gets the mysql driver, `none` included.
fn sequelize_driver(database: Database) -> &'static str {
    match database {
        Database::PostgreSql => SEQUELIZE_POSTGRES_DRIVER,
        _ => SEQUELIZE_FALLBACK_DRIVER,
    }
}
