//! The question set used to collect a [`Selection`](super::Selection).
//!
//! Questions are asked in [`QuestionId::ALL`] order. The choice set of each
//! question is a pure function of the answers collected so far
//! ([`available_choices`]), so the ORM list can depend on the database
//! answer without the prompt layer holding any state of its own.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::value_objects::{Database, Framework, Orm};

/// Stable identifier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionId {
    Framework,
    Database,
    Orm,
}

impl QuestionId {
    /// Questions in the order they are asked.
    pub const ALL: [QuestionId; 3] = [Self::Framework, Self::Database, Self::Orm];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Framework => "framework",
            Self::Database => "database",
            Self::Orm => "orm",
        }
    }

    /// Prompt text shown to the operator.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Framework => "Which web framework do you want to use?",
            Self::Database => "Which database do you want to use?",
            Self::Orm => "Which ORM do you want to use?",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully-shaped question, ready for a prompter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub message: &'static str,
    pub choices: Vec<&'static str>,
}

impl Question {
    /// Whether `answer` is one of the offered choices.
    pub fn accepts(&self, answer: &str) -> bool {
        self.choices.contains(&answer)
    }
}

/// Raw answers keyed by question id, as returned by the prompt collaborator.
///
/// Values are unparsed; `Selection::try_from(&Answers)` validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(BTreeMap<QuestionId, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, value: impl Into<String>) {
        self.0.insert(id, value.into());
    }

    pub fn with(mut self, id: QuestionId, value: impl Into<String>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.0.iter().map(|(id, v)| (*id, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Choices offered for `id` given the answers collected so far.
///
/// The ORM list depends on the database answer: MongoDB offers only
/// mongoose; any other answer (or none yet) offers the relational set.
pub fn available_choices(id: QuestionId, answers: &Answers) -> Vec<&'static str> {
    match id {
        QuestionId::Framework => Framework::ALL.iter().map(|f| f.as_str()).collect(),
        QuestionId::Database => Database::ALL.iter().map(|d| d.as_str()).collect(),
        QuestionId::Orm => {
            let database = answers
                .get(QuestionId::Database)
                .and_then(|d| d.parse::<Database>().ok())
                .unwrap_or(Database::None);
            database
                .supported_orms()
                .iter()
                .map(|o: &Orm| o.as_str())
                .collect()
        }
    }
}

/// Build the question for `id` from the answers collected so far.
pub fn question(id: QuestionId, answers: &Answers) -> Question {
    Question {
        id,
        message: id.message(),
        choices: available_choices(id, answers),
    }
}
