//! Structural checks applied before a question enters the store.

use crate::error::ValidationError;
use crate::question::Question;

/// Minimum number of choices a question must offer.
pub const MIN_CHOICES: usize = 2;

/// Checks that `question` is well formed.
///
/// Checks run in order and stop at the first failure: non-empty text, at
/// least [`MIN_CHOICES`] choices, answer present among the choices.
///
/// # Errors
/// Returns the [`ValidationError`] for the first failing check.
pub fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if question.text.is_empty() {
        return Err(ValidationError::TextRequired);
    }
    if question.choices.len() < MIN_CHOICES {
        return Err(ValidationError::InsufficientChoices);
    }
    if !question.choices.iter().any(|c| *c == question.answer) {
        return Err(ValidationError::AnswerNotAmongChoices);
    }
    Ok(())
}
