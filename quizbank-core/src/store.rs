//! Question storage: the repository capability and its in-memory implementation.
//!
//! The in-memory store guards its map and id counter with a single
//! [`RwLock`], so readers run concurrently while each writer has exclusive
//! access. No lock is ever held across a call into caller code.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::id::QuestionId;
use crate::question::Question;

/// Storage capability consumed by [`QuestionService`](crate::service::QuestionService).
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across request handlers.
pub trait QuestionRepository: Send + Sync {
    /// Returns a snapshot of every stored question.
    ///
    /// The snapshot is independent of the store; callers must not rely on
    /// its order.
    fn get_all(&self) -> Vec<Question>;

    /// Looks up a question by identifier.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no question has `id`.
    fn get_by_id(&self, id: QuestionId) -> Result<Question, CoreError>;

    /// Inserts `question` under a freshly assigned identifier and returns it.
    ///
    /// Any identifier already set on `question` is ignored.
    ///
    /// # Errors
    /// Returns [`CoreError::IdsExhausted`] once the identifier space is used up.
    fn add(&self, question: Question) -> Result<QuestionId, CoreError>;

    /// Overwrites the question stored under `id`, keeping `id` as its identifier.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no question has `id`.
    fn replace(&self, id: QuestionId, question: Question) -> Result<(), CoreError>;

    /// Removes the question stored under `id`.
    ///
    /// # Errors
    /// Returns [`CoreError::NotFound`] if no question has `id`.
    fn delete(&self, id: QuestionId) -> Result<(), CoreError>;

    /// Number of stored questions.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no questions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
struct Inner {
    questions: IndexMap<QuestionId, Question>,
    next_id: QuestionId,
}

/// Thread-safe, process-local question store.
///
/// Snapshots come out in insertion order. Identifiers start at `0` and are
/// never reused, even after a delete.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("question store read lock poisoned")
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("question store write lock poisoned")
    }
}

impl QuestionRepository for InMemoryStore {
    fn get_all(&self) -> Vec<Question> {
        self.read().questions.values().cloned().collect()
    }

    fn get_by_id(&self, id: QuestionId) -> Result<Question, CoreError> {
        self.read()
            .questions
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound(id))
    }

    fn add(&self, mut question: Question) -> Result<QuestionId, CoreError> {
        let mut inner = self.write();
        let id = inner.next_id;
        // Reserve the successor first so `u64::MAX` is never handed out twice.
        inner.next_id = id.checked_next().ok_or(CoreError::IdsExhausted)?;
        question.id = id;
        inner.questions.insert(id, question);
        Ok(id)
    }

    fn replace(&self, id: QuestionId, mut question: Question) -> Result<(), CoreError> {
        let mut inner = self.write();
        let slot = inner.questions.get_mut(&id).ok_or(CoreError::NotFound(id))?;
        question.id = id;
        *slot = question;
        Ok(())
    }

    fn delete(&self, id: QuestionId) -> Result<(), CoreError> {
        self.write()
            .questions
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(CoreError::NotFound(id))
    }

    fn len(&self) -> usize {
        self.read().questions.len()
    }
}
