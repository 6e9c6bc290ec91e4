//! Tag filtering and random sampling over question snapshots.
//!
//! Both functions are pure: they take a borrowed snapshot and return a
//! fresh vector, leaving the caller's slice untouched.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::question::Question;

/// Returns every question tagged with `tag`, preserving input order.
#[must_use]
pub fn filter_by_tag(questions: &[Question], tag: &str) -> Vec<Question> {
    questions.iter().filter(|q| q.has_tag(tag)).cloned().collect()
}

/// Returns `min(n, questions.len())` questions in uniformly random order,
/// using the thread-local RNG. A non-positive `n` yields an empty vector.
#[must_use]
pub fn random_sample(questions: &[Question], n: i64) -> Vec<Question> {
    random_sample_with(questions, n, &mut rand::thread_rng())
}

/// Same as [`random_sample`] with a caller-supplied RNG.
#[must_use]
pub fn random_sample_with<R>(questions: &[Question], n: i64, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let Ok(n) = usize::try_from(n) else {
        return Vec::new();
    };
    let mut sample = questions.to_vec();
    sample.shuffle(rng);
    sample.truncate(n);
    sample
}
