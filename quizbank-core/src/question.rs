use serde::{Deserialize, Deserializer, Serialize};

use crate::id::QuestionId;

/// A quiz item: prompt text, ordered choices, the correct answer and
/// optional free-text tags.
///
/// The `id` carried by a decoded payload is never authoritative; the store
/// assigns identifiers on insert and keys replacements by path id.
///
/// Decoding is lenient: a missing or `null` field takes its empty value so
/// that structural defects are reported by validation rather than by the
/// JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier. A missing, `null` or negative payload id
    /// decodes as `0`.
    #[serde(default, deserialize_with = "payload_id")]
    pub id: QuestionId,
    /// Prompt shown to the player. Must be non-empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Answer options in display order. At least two are required.
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<String>,
    /// The correct option; must equal one of `choices` exactly.
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    /// Labels used for filtering. Order carries no meaning.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Payload ids are ignored by the store, so any integer is accepted here.
fn payload_id<'de, D>(deserializer: D) -> Result<QuestionId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|id| u64::try_from(id).ok())
        .map(QuestionId)
        .unwrap_or_default())
}

impl Question {
    /// Creates an untagged question with a zero identifier.
    pub fn new<I, S>(text: impl Into<String>, choices: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: QuestionId::default(),
            text: text.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            answer: answer.into(),
            tags: Vec::new(),
        }
    }

    /// Replaces the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if `tag` is one of this question's tags (exact match).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
