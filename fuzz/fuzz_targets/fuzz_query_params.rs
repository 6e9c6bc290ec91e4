//! Fuzz target: integer query parameter and path id parsing.
//!
//! Verifies that arbitrary UTF-8 strings fed to the parsers never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quizbank_gateway::routes::{parse_count, parse_id};

fuzz_target!(|data: &str| {
    let _ = parse_count(Some(data), 5);
    let _ = parse_id(data);
});
