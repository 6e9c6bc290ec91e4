//! Example questions demonstrating the schema.
//!
//! The set mixes tagged and untagged questions and shares the `math` tag
//! across two entries so tag filtering has something to select.

use crate::question::Question;

/// Returns the canonical example questions, all of which pass validation.
#[must_use]
pub fn example_questions() -> Vec<Question> {
    vec![
        Question::new("What is 2 + 2?", ["3", "4", "5"], "4").with_tags(["math", "easy"]),
        Question::new("Which gas do plants absorb?", ["Oxygen", "Carbon dioxide"], "Carbon dioxide")
            .with_tags(["science"]),
        Question::new("What is 7 * 8?", ["54", "56", "58", "64"], "56").with_tags(["math"]),
        Question::new("Who wrote Hamlet?", ["Marlowe", "Shakespeare"], "Shakespeare"),
    ]
}
