//! Prompter backed by answers supplied up front.

use nodekit_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{Answers, Question, QuestionId},
    error::NodekitResult,
};
use tracing::debug;

/// Answers questions from a preset record (command-line flags, config
/// defaults, tests).
///
/// A question without a preset is handed to the fallback prompter if one
/// is set. With `accept_first` instead, it takes the first offered choice.
/// Otherwise it fails with `PromptFailed`.
pub struct PresetAnswers {
    answers: Answers,
    fallback: Option<Box<dyn Prompter>>,
    accept_first: bool,
}

impl PresetAnswers {
    pub fn new(answers: Answers) -> Self {
        Self {
            answers,
            fallback: None,
            accept_first: false,
        }
    }

    pub fn with_fallback(mut self, prompter: Box<dyn Prompter>) -> Self {
        self.fallback = Some(prompter);
        self
    }

    /// Answer unset questions with their first choice instead of asking.
    pub fn accept_first(mut self, yes: bool) -> Self {
        self.accept_first = yes;
        self
    }

    /// Questions that have no preset answer.
    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(|id| !self.answers.contains(*id))
            .collect()
    }
}

impl Prompter for PresetAnswers {
    fn ask(&self, question: &Question) -> NodekitResult<String> {
        if let Some(answer) = self.answers.get(question.id) {
            debug!(question = %question.id, answer, "Using preset answer");
            return Ok(answer.to_string());
        }

        if self.accept_first {
            if let Some(first) = question.choices.first() {
                debug!(question = %question.id, answer = first, "Accepting first choice");
                return Ok((*first).to_string());
            }
        }

        match &self.fallback {
            Some(prompter) => prompter.ask(question),
            None => Err(ApplicationError::PromptFailed {
                question: question.id.to_string(),
                reason: "no answer was provided and prompting is disabled".into(),
            }
            .into()),
        }
    }
}
