#![no_main]

//! Fuzz target for single-line classification.
//!
//! Classification must never panic, every match must canonicalize to the
//! fixed-width banner, and canonical output must not classify again.

use libfuzzer_sys::fuzz_target;
use sepfix_domain::{Classification, SEPARATOR_WIDTH, canonical_line, classify};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let classification = classify(line);
    match canonical_line(&classification) {
        None => {
            assert!(matches!(classification, Classification::NotASeparator));
        }
        Some(replacement) => {
            assert!(replacement.contains(&"=".repeat(SEPARATOR_WIDTH)));
            // Rewriting is a one-shot operation.
            assert!(matches!(
                classify(&replacement),
                Classification::NotASeparator
            ));
        }
    }
});
