//! The `Selection` aggregate root and its typestate builder.
//!
//! A `Selection` is the validated record of the operator's framework,
//! database and ORM choices. Once a `Selection` exists the database → ORM
//! constraint is guaranteed to hold; the resolver and planner rely on it.
//!
//! # Typestate builder
//!
//! The builder mirrors the question order: the ORM can only be set after
//! the database, because the set of valid ORMs depends on it. The database
//! value travels inside the `HasDatabase` marker, so no runtime unwrap is
//! needed once the state is reached.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    capabilities,
    error::DomainError,
    questions::{Answers, QuestionId},
    value_objects::{Database, Framework, Orm},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated set of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    framework: Framework,
    database: Database,
    orm: Orm,
}

impl Selection {
    /// Construct and validate in one step.
    pub fn new(framework: Framework, database: Database, orm: Orm) -> Result<Self, DomainError> {
        let selection = Self {
            framework,
            database,
            orm,
        };
        selection.validate()?;
        Ok(selection)
    }

    pub fn builder() -> SelectionBuilder<NoDatabase> {
        SelectionBuilder::new()
    }

    pub const fn framework(&self) -> Framework {
        self.framework
    }
    pub const fn database(&self) -> Database {
        self.database
    }
    pub const fn orm(&self) -> Orm {
        self.orm
    }

    /// Re-check the database → ORM constraint.
    pub fn validate(&self) -> Result<(), DomainError> {
        capabilities::validate_orm_for_database(self.orm, self.database).map_err(|reason| {
            DomainError::IncompatibleOrm {
                orm: self.orm.to_string(),
                database: self.database.to_string(),
                reason,
            }
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (database: {}, orm: {})",
            self.framework, self.database, self.orm
        )
    }
}

impl TryFrom<&Answers> for Selection {
    type Error = DomainError;

    /// Parse the raw answer record returned by the prompt collaborator.
    fn try_from(answers: &Answers) -> Result<Self, Self::Error> {
        let field = |id: QuestionId| {
            answers
                .get(id)
                .ok_or(DomainError::MissingRequiredField { field: id.as_str() })
        };

        let framework: Framework = field(QuestionId::Framework)?.parse()?;
        let database: Database = field(QuestionId::Database)?.parse()?;
        let orm: Orm = field(QuestionId::Orm)?.parse()?;

        Selection::new(framework, database, orm)
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: database has not yet been chosen.
#[derive(Debug, Clone, Copy)]
pub struct NoDatabase;
/// Marker: database chosen; the ORM may now be set.
#[derive(Debug, Clone, Copy)]
pub struct HasDatabase(Database);

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`Selection`].
pub struct SelectionBuilder<D> {
    framework: Option<Framework>,
    orm: Option<Orm>,
    database: D,
}

impl SelectionBuilder<NoDatabase> {
    pub fn new() -> Self {
        Self {
            framework: None,
            orm: None,
            database: NoDatabase,
        }
    }

    /// Set the database. This transitions the builder to `HasDatabase`.
    pub fn database(self, database: Database) -> SelectionBuilder<HasDatabase> {
        SelectionBuilder {
            framework: self.framework,
            orm: self.orm,
            database: HasDatabase(database),
        }
    }
}

impl Default for SelectionBuilder<NoDatabase> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SelectionBuilder<D> {
    /// Set the framework. Valid in any state.
    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }
}

impl SelectionBuilder<HasDatabase> {
    /// Set the ORM.
    ///
    /// Rejects immediately if the chosen database does not offer this ORM.
    pub fn orm(mut self, orm: Orm) -> Result<Self, DomainError> {
        let HasDatabase(database) = self.database;
        if let Err(reason) = capabilities::validate_orm_for_database(orm, database) {
            return Err(DomainError::IncompatibleOrm {
                orm: orm.to_string(),
                database: database.to_string(),
                reason,
            });
        }
        self.orm = Some(orm);
        Ok(self)
    }

    /// Build the selection. Framework and ORM are both required.
    pub fn build(self) -> Result<Selection, DomainError> {
        let HasDatabase(database) = self.database;
        let framework = self
            .framework
            .ok_or(DomainError::MissingRequiredField { field: "framework" })?;
        let orm = self
            .orm
            .ok_or(DomainError::MissingRequiredField { field: "orm" })?;

        Selection::new(framework, database, orm)
    }
}
