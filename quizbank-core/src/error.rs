use crate::id::QuestionId;

/// Errors produced by the `quizbank-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// No stored question has the given identifier.
    #[error("question not found")]
    NotFound(QuestionId),

    /// The id counter has no identifiers left to hand out.
    #[error("question identifiers exhausted")]
    IdsExhausted,

    /// The question failed structural validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Structural defects detected by [`validate_question`](crate::validate::validate_question).
///
/// The `Display` strings are forwarded verbatim to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The question text is empty.
    #[error("text required")]
    TextRequired,

    /// Fewer than two choices were supplied.
    #[error("insufficient choices")]
    InsufficientChoices,

    /// The answer does not equal any of the choices.
    #[error("answer not among choices")]
    AnswerNotAmongChoices,
}
