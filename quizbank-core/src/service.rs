//! Question operations consumed by the transport layer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::id::QuestionId;
use crate::query::{filter_by_tag, random_sample};
use crate::question::Question;
use crate::store::QuestionRepository;
use crate::validate::validate_question;

/// Orchestrates validation, storage and sampling.
///
/// Holds no state of its own beyond a shared handle to the repository, so
/// cloning a service is cheap and every clone sees the same questions.
#[derive(Debug)]
pub struct QuestionService<R: QuestionRepository> {
    repo: Arc<R>,
}

impl<R: QuestionRepository> Clone for QuestionService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: QuestionRepository> QuestionService<R> {
    /// Create a service over the given repository.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Lists questions, optionally restricted to `tag` and capped at `limit`.
    ///
    /// An empty `tag` disables filtering. A `limit` of zero or less, or one
    /// at least as large as the result, returns everything. Truncation keeps
    /// the first `limit` questions of the store's snapshot order.
    #[must_use]
    pub fn list(&self, tag: &str, limit: i64) -> Vec<Question> {
        let mut questions = self.repo.get_all();
        if !tag.is_empty() {
            questions = filter_by_tag(&questions, tag);
        }
        if let Ok(limit) = usize::try_from(limit) {
            if limit > 0 {
                questions.truncate(limit);
            }
        }
        debug!(tag, limit, count = questions.len(), "listed questions");
        questions
    }

    /// Fetches one question.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if `id` is not stored.
    pub fn get(&self, id: QuestionId) -> Result<Question, CoreError> {
        self.repo.get_by_id(id)
    }

    /// Validates and stores a new question, returning its identifier.
    ///
    /// # Errors
    /// Returns [`CoreError::Validation`] if the question is malformed, or
    /// [`CoreError::IdsExhausted`] if the store cannot assign an identifier.
    pub fn create(&self, question: Question) -> Result<QuestionId, CoreError> {
        if let Err(e) = validate_question(&question) {
            warn!(reason = %e, "rejected new question");
            return Err(e.into());
        }
        let id = self.repo.add(question)?;
        info!(id = %id, "question created");
        Ok(id)
    }

    /// Validates `question` and replaces the one stored under `id`.
    ///
    /// Validation runs before the existence check, so a malformed payload
    /// is reported as such even when `id` is unknown.
    ///
    /// # Errors
    /// Returns [`CoreError::Validation`] if the question is malformed, or
    /// [`CoreError::NotFound`] if `id` is not stored.
    pub fn update(&self, id: QuestionId, question: Question) -> Result<(), CoreError> {
        if let Err(e) = validate_question(&question) {
            warn!(id = %id, reason = %e, "rejected question update");
            return Err(e.into());
        }
        self.repo.replace(id, question)?;
        info!(id = %id, "question replaced");
        Ok(())
    }

    /// Removes a question.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if `id` is not stored.
    pub fn delete(&self, id: QuestionId) -> Result<(), CoreError> {
        self.repo.delete(id)?;
        info!(id = %id, "question deleted");
        Ok(())
    }

    /// Returns up to `n` questions in random order.
    #[must_use]
    pub fn random(&self, n: i64) -> Vec<Question> {
        let sample = random_sample(&self.repo.get_all(), n);
        debug!(requested = n, count = sample.len(), "sampled questions");
        sample
    }
}
