//! Domain value objects: Framework, Database, Orm.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO package or compatibility knowledge. Package tables and the
//! database → ORM constraint live in `capabilities.rs`. This file's only job
//! is to define the closed choice sets, their string representations, and
//! their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here, plus it to `ALL`
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a package entry in `capabilities.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Framework ────────────────────────────────────────────────────────────────

/// A supported Node.js web framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Express,
    Fastify,
    NestJs,
}

impl Framework {
    /// Every framework, in the order they are offered to the operator.
    pub const ALL: [Framework; 3] = [Self::Express, Self::Fastify, Self::NestJs];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::Fastify => "fastify",
            Self::NestJs => "nestjs",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Ok(Self::Express),
            "fastify" => Ok(Self::Fastify),
            "nestjs" | "nest" => Ok(Self::NestJs),
            other => Err(DomainError::UnknownChoice {
                field: "framework",
                value: other.to_string(),
            }),
        }
    }
}

// ── Database ─────────────────────────────────────────────────────────────────

/// The database the generated project talks to.
///
/// `None` is a real choice, not an absent value: it means "no database".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    None,
    MongoDb,
    PostgreSql,
    MySql,
}

impl Database {
    pub const ALL: [Database; 4] = [Self::None, Self::MongoDb, Self::PostgreSql, Self::MySql];

    /// Identifier used in prompts, flags, and the prisma `provider` field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::MongoDb => "mongodb",
            Self::PostgreSql => "postgresql",
            Self::MySql => "mysql",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// ORMs offered for this database.
    ///
    /// Delegates to `capabilities::orms_for`.
    pub fn supported_orms(self) -> &'static [Orm] {
        crate::domain::capabilities::orms_for(self)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "mysql" => Ok(Self::MySql),
            other => Err(DomainError::UnknownChoice {
                field: "database",
                value: other.to_string(),
            }),
        }
    }
}

// ── Orm ──────────────────────────────────────────────────────────────────────

/// Data-access library layered on top of the database driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orm {
    None,
    Mongoose,
    Prisma,
    TypeOrm,
    Sequelize,
    Knex,
}

impl Orm {
    pub const ALL: [Orm; 6] = [
        Self::None,
        Self::Mongoose,
        Self::Prisma,
        Self::TypeOrm,
        Self::Sequelize,
        Self::Knex,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mongoose => "mongoose",
            Self::Prisma => "prisma",
            Self::TypeOrm => "typeorm",
            Self::Sequelize => "sequelize",
            Self::Knex => "knex",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Orm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "mongoose" => Ok(Self::Mongoose),
            "prisma" => Ok(Self::Prisma),
            "typeorm" => Ok(Self::TypeOrm),
            "sequelize" => Ok(Self::Sequelize),
            "knex" => Ok(Self::Knex),
            other => Err(DomainError::UnknownChoice {
                field: "orm",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_choice_identifiers() {
        assert_eq!(Framework::NestJs.to_string(), "nestjs");
        assert_eq!(Database::PostgreSql.to_string(), "postgresql");
        assert_eq!(Orm::TypeOrm.to_string(), "typeorm");
    }

    #[test]
    fn every_variant_round_trips_through_its_identifier() {
        for fw in Framework::ALL {
            assert_eq!(fw.as_str().parse::<Framework>().unwrap(), fw);
        }
        for db in Database::ALL {
            assert_eq!(db.as_str().parse::<Database>().unwrap(), db);
        }
        for orm in Orm::ALL {
            assert_eq!(orm.as_str().parse::<Orm>().unwrap(), orm);
        }
    }

    #[test]
    fn from_str_accepts_aliases_and_case() {
        assert_eq!("Nest".parse::<Framework>().unwrap(), Framework::NestJs);
        assert_eq!("postgres".parse::<Database>().unwrap(), Database::PostgreSql);
        assert_eq!("MONGO".parse::<Database>().unwrap(), Database::MongoDb);
        assert_eq!(" Prisma ".parse::<Orm>().unwrap(), Orm::Prisma);
    }

    #[test]
    fn from_str_unknown_reports_field() {
        let err = "koa".parse::<Framework>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownChoice {
                field: "framework",
                value: "koa".into()
            }
        );
        assert!("sqlite".parse::<Database>().is_err());
        assert!("drizzle".parse::<Orm>().is_err());
    }

    #[test]
    fn none_choices_are_detected() {
        assert!(Database::None.is_none());
        assert!(!Database::MySql.is_none());
        assert!(Orm::None.is_none());
        assert!(!Orm::Knex.is_none());
    }
}
