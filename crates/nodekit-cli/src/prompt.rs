//! Interactive prompter backed by `dialoguer`.

use nodekit_core::application::ports::Prompter;
#[cfg(feature = "interactive")]
use nodekit_core::{application::ApplicationError, domain::Question, error::NodekitResult};

/// Reason reported when the operator dismisses a prompt.
pub const CANCELLED: &str = "cancelled";

/// Asks each question with an arrow-key selection list on stderr.
#[cfg(feature = "interactive")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

#[cfg(feature = "interactive")]
impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &Question) -> NodekitResult<String> {
        use dialoguer::{Select, theme::ColorfulTheme};

        let failed = |reason: String| ApplicationError::PromptFailed {
            question: question.id.to_string(),
            reason,
        };

        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(question.message)
            .items(&question.choices)
            .default(0)
            .interact_opt()
            .map_err(|e| failed(e.to_string()))?
            .ok_or_else(|| failed(CANCELLED.into()))?;

        question
            .choices
            .get(picked)
            .map(|choice| (*choice).to_string())
            .ok_or_else(|| failed(format!("selection {picked} is out of range")).into())
    }
}

/// Whether this build can prompt at all.
pub const fn interactive_available() -> bool {
    cfg!(feature = "interactive")
}

/// The prompter used for answers not given on the command line.
#[cfg(feature = "interactive")]
pub fn interactive() -> Option<Box<dyn Prompter>> {
    Some(Box::new(DialoguerPrompter))
}

#[cfg(not(feature = "interactive"))]
pub fn interactive() -> Option<Box<dyn Prompter>> {
    None
}
