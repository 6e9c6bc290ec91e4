//! Core of the quizbank question service.
//!
//! Defines the question model, the repository capability with its
//! thread-safe in-memory implementation, structural validation, tag
//! filtering and random sampling, and the [`QuestionService`] that ties
//! them together for the HTTP gateway.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod examples;
pub mod id;
pub mod query;
pub mod question;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{CoreError, ValidationError};
pub use id::QuestionId;
pub use query::{filter_by_tag, random_sample, random_sample_with};
pub use question::Question;
pub use service::QuestionService;
pub use store::{InMemoryStore, QuestionRepository};
pub use validate::validate_question;
