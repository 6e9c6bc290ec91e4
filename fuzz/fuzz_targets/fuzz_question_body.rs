//! Fuzz target: JSON decoding and validation of question bodies.
//!
//! Arbitrary bytes go through the same path as `POST /questions`. Decoding
//! and validation may fail but must never panic, and anything that passes
//! validation must survive a store round trip unchanged.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quizbank_core::{validate_question, InMemoryStore, QuestionRepository};
use quizbank_gateway::routes::decode_question;

fuzz_target!(|data: &[u8]| {
    let Ok(question) = decode_question(data) else {
        return;
    };
    if validate_question(&question).is_err() {
        return;
    }
    let store = InMemoryStore::new();
    let id = match store.add(question.clone()) {
        Ok(id) => id,
        Err(e) => panic!("fresh store refused a valid question: {e}"),
    };
    match store.get_by_id(id) {
        Ok(stored) => {
            assert_eq!(stored.id, id);
            assert_eq!(stored.text, question.text);
            assert_eq!(stored.choices, question.choices);
        }
        Err(e) => panic!("freshly added question missing: {e}"),
    }
});
